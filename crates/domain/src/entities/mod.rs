//! Entities - persisted character rows and aggregates.

mod character;

pub use character::{AbilityScores, Character, CharacterClass, CharacterSheet, Item, ItemModifier};
