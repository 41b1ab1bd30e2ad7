//! Port traits for infrastructure boundaries.
//!
//! The character store is the only abstraction in the engine: the SQLite
//! adapter is the production implementation and could be swapped for another
//! relational backend without touching the use cases. Tests inject mocks.

mod error;
mod store;

pub use error::StoreError;
pub use store::CharacterStore;

#[cfg(test)]
pub use store::MockCharacterStore;
