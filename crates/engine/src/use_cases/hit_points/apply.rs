//! Apply hit points use case.
//!
//! The shared mutation protocol behind damage and healing: read the previous
//! snapshot, apply the delta atomically in the store, read back the result.
//! The zero floor is evaluated by the store inside the update statement, so
//! this code never computes new hit points from a previously read value.

use std::sync::Arc;

use hptrackr_domain::{CharacterName, HitPointState};

use crate::infrastructure::ports::CharacterStore;

use super::error::HitPointError;

/// Before/after snapshots of one hit-point mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPointChange {
    pub original: HitPointState,
    pub updated: HitPointState,
}

/// Apply hit points use case.
pub struct ApplyHitPoints {
    store: Arc<dyn CharacterStore>,
}

impl ApplyHitPoints {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    /// Execute the mutation protocol.
    ///
    /// # Arguments
    /// * `name` - The character to mutate
    /// * `delta` - Signed hit-point change (negative for damage)
    /// * `temp_hit_points` - `Some(v)` replaces the temp buffer, `None` keeps it
    ///
    /// # Returns
    /// * `Ok(HitPointChange)` - Snapshots from before and after the update
    /// * `Err(HitPointError)` - Character missing or store failure
    pub async fn execute(
        &self,
        name: &CharacterName,
        delta: i64,
        temp_hit_points: Option<i64>,
    ) -> Result<HitPointChange, HitPointError> {
        let original = self
            .store
            .get_hit_points(name)
            .await?
            .ok_or_else(|| HitPointError::CharacterNotFound(name.clone()))?;

        self.store
            .update_hit_points(name, delta, temp_hit_points)
            .await?;

        let updated = self
            .store
            .get_hit_points(name)
            .await?
            .ok_or_else(|| HitPointError::CharacterNotFound(name.clone()))?;

        Ok(HitPointChange { original, updated })
    }
}
