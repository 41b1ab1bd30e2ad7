//! Character rows and the full character-sheet aggregate.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{CharacterName, DefenseEntry, HitPointState};

/// The persisted core of a character: identity and vitals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: CharacterName,
    pub level: i64,
    pub hit_points: i64,
    pub temp_hit_points: i64,
}

impl Character {
    /// The character's current vitals as a standalone snapshot.
    pub fn hit_point_state(&self) -> HitPointState {
        HitPointState::new(self.hit_points, self.temp_hit_points)
    }
}

/// One class a character has levels in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub name: String,
    pub hit_dice_value: i64,
    pub class_level: i64,
}

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: i64,
    pub dexterity: i64,
    pub constitution: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
}

/// A stat adjustment granted by an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    pub affected_object: String,
    pub affected_value: String,
    pub value: i64,
}

/// An item a character carries, with its modifier if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub modifier: Option<ItemModifier>,
}

/// The full character document: the seed-file format and the body of the
/// full-info response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub name: CharacterName,
    pub level: i64,
    pub hit_points: i64,
    #[serde(default)]
    pub temp_hit_points: i64,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub stats: Option<AbilityScores>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub defenses: Vec<DefenseEntry>,
}

impl CharacterSheet {
    /// Check the invariants the JSON format alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` on a non-positive level, negative
    /// hit points or temp hit points, or a class with a non-positive level.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.level < 1 {
            return Err(DomainError::validation("level must be positive"));
        }
        if self.hit_points < 0 {
            return Err(DomainError::validation("hitPoints cannot be negative"));
        }
        if self.temp_hit_points < 0 {
            return Err(DomainError::validation("tempHitPoints cannot be negative"));
        }
        for class in &self.classes {
            if class.class_level < 1 {
                return Err(DomainError::validation(format!(
                    "classLevel for {} must be positive",
                    class.name
                )));
            }
        }
        Ok(())
    }
}
