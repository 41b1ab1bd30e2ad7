//! Errors for the hit-point use cases.

use hptrackr_domain::{CharacterName, DomainError};

use crate::infrastructure::ports::StoreError;

/// Errors from the damage, heal, and temporary-HP flows.
#[derive(Debug, thiserror::Error)]
pub enum HitPointError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterName),

    #[error("Unrecognized damage type: {0}")]
    UnknownDamageType(String),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
