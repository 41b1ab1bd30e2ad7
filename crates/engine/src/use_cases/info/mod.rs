//! Character information queries.
//!
//! Read-side use cases backing the `/info` routes: the full sheet and the
//! per-section lookups. Every query checks the character exists first so a
//! missing name surfaces as not-found rather than an empty section.

use std::sync::Arc;

use hptrackr_domain::{
    AbilityScores, Character, CharacterClass, CharacterName, CharacterSheet, DefenseEntry,
    HitPointState, Item,
};

use crate::infrastructure::ports::{CharacterStore, StoreError};

/// Errors from the info queries.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterName),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Character info use cases.
pub struct CharacterInfo {
    store: Arc<dyn CharacterStore>,
}

impl CharacterInfo {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    async fn require_character(&self, name: &CharacterName) -> Result<Character, InfoError> {
        self.store
            .get_character(name)
            .await?
            .ok_or_else(|| InfoError::CharacterNotFound(name.clone()))
    }

    /// The full character sheet: core row plus classes, stats, items, and
    /// defenses.
    pub async fn full_sheet(&self, name: &CharacterName) -> Result<CharacterSheet, InfoError> {
        let character = self.require_character(name).await?;
        let classes = self.store.get_classes(name).await?;
        let stats = self.store.get_stats(name).await?;
        let items = self.store.get_items(name).await?;
        let defenses = self.store.get_defenses(name).await?;

        Ok(CharacterSheet {
            name: character.name,
            level: character.level,
            hit_points: character.hit_points,
            temp_hit_points: character.temp_hit_points,
            classes,
            stats,
            items,
            defenses,
        })
    }

    pub async fn hit_points(&self, name: &CharacterName) -> Result<HitPointState, InfoError> {
        let state = self
            .store
            .get_hit_points(name)
            .await?
            .ok_or_else(|| InfoError::CharacterNotFound(name.clone()))?;
        Ok(state)
    }

    pub async fn classes(&self, name: &CharacterName) -> Result<Vec<CharacterClass>, InfoError> {
        self.require_character(name).await?;
        Ok(self.store.get_classes(name).await?)
    }

    pub async fn stats(&self, name: &CharacterName) -> Result<Option<AbilityScores>, InfoError> {
        self.require_character(name).await?;
        Ok(self.store.get_stats(name).await?)
    }

    pub async fn items(&self, name: &CharacterName) -> Result<Vec<Item>, InfoError> {
        self.require_character(name).await?;
        Ok(self.store.get_items(name).await?)
    }

    pub async fn defenses(&self, name: &CharacterName) -> Result<Vec<DefenseEntry>, InfoError> {
        self.require_character(name).await?;
        Ok(self.store.get_defenses(name).await?)
    }
}
