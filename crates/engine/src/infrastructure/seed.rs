//! Startup seeding from a character-sheet JSON file.
//!
//! The engine owns exactly the characters it seeds: it populates them after
//! the store opens and removes them again on shutdown, so every run starts
//! from the sheet on disk.

use std::path::Path;

use anyhow::Context;

use hptrackr_domain::CharacterSheet;

use crate::infrastructure::ports::CharacterStore;

/// Load and validate a character sheet from a JSON file.
pub fn load_sheet(path: &Path) -> anyhow::Result<CharacterSheet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading character data from {}", path.display()))?;
    let sheet: CharacterSheet = serde_json::from_str(&raw)
        .with_context(|| format!("parsing character data in {}", path.display()))?;
    sheet
        .validate()
        .with_context(|| format!("invalid character data in {}", path.display()))?;
    Ok(sheet)
}

/// Seed the store with the sheet's character.
///
/// Cleans up any rows left by an unclean previous shutdown before inserting,
/// so seeding is idempotent across restarts.
pub async fn seed_character(
    store: &dyn CharacterStore,
    sheet: &CharacterSheet,
) -> anyhow::Result<()> {
    store.cleanup(&sheet.name).await?;
    store.populate(sheet).await?;
    tracing::info!(character = %sheet.name, "Seeded character data");
    Ok(())
}
