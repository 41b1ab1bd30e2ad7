//! The character-store port trait.

use async_trait::async_trait;

use hptrackr_domain::{
    AbilityScores, Character, CharacterClass, CharacterName, CharacterSheet, DefenseEntry,
    HitPointState, Item,
};

use super::error::StoreError;

/// Abstract character store consumed by the use cases.
///
/// Every hit-point rule that must survive concurrent writers (the zero floor
/// and the monotonic temp-HP grant) is evaluated by the store itself inside
/// a single update statement, never as read-then-write steps in application
/// code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    // Reads
    async fn get_character(&self, name: &CharacterName) -> Result<Option<Character>, StoreError>;
    async fn get_hit_points(
        &self,
        name: &CharacterName,
    ) -> Result<Option<HitPointState>, StoreError>;

    /// Defense profile in stable row order; empty when none are recorded.
    async fn get_defenses(&self, name: &CharacterName) -> Result<Vec<DefenseEntry>, StoreError>;
    async fn get_classes(&self, name: &CharacterName) -> Result<Vec<CharacterClass>, StoreError>;
    async fn get_stats(&self, name: &CharacterName)
        -> Result<Option<AbilityScores>, StoreError>;
    async fn get_items(&self, name: &CharacterName) -> Result<Vec<Item>, StoreError>;

    // Mutations
    /// Apply a signed hit-point delta, clamped at the zero floor, optionally
    /// replacing the temp-HP buffer, all in one atomic statement.
    ///
    /// `Some(v)` unconditionally replaces the stored temp value; `None`
    /// preserves it. Fails with `StoreError::NotFound` when no row matches.
    async fn update_hit_points(
        &self,
        name: &CharacterName,
        delta: i64,
        temp_hit_points: Option<i64>,
    ) -> Result<(), StoreError>;

    /// Replace the temp-HP buffer only if `candidate` strictly exceeds the
    /// stored value; the comparison runs inside the update statement.
    /// Returns whether the grant took effect.
    async fn raise_temp_hit_points(
        &self,
        name: &CharacterName,
        candidate: i64,
    ) -> Result<bool, StoreError>;

    // Lifecycle
    /// Insert a full character sheet (seed path).
    async fn populate(&self, sheet: &CharacterSheet) -> Result<(), StoreError>;
    /// Remove every row belonging to the named character.
    async fn cleanup(&self, name: &CharacterName) -> Result<(), StoreError>;
}
