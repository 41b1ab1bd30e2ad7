//! Defensive reactions to typed damage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DamageType;
use crate::error::DomainError;

/// How a character reacts to a damage type it has a defense against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefenseKind {
    /// Incoming damage of the matching type is halved.
    Resistance,
    /// Incoming damage of the matching type is ignored entirely.
    Immunity,
}

impl DefenseKind {
    /// Returns the canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefenseKind::Resistance => "resistance",
            DefenseKind::Immunity => "immunity",
        }
    }
}

impl fmt::Display for DefenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DefenseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resistance" => Ok(DefenseKind::Resistance),
            "immunity" => Ok(DefenseKind::Immunity),
            _ => Err(DomainError::parse(format!("unknown defense kind: {}", s))),
        }
    }
}

/// One damage-type-to-defense mapping in a character's defense profile.
///
/// A character is expected to carry at most one entry per damage type.
/// Duplicates are tolerated: the first entry in profile order governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseEntry {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    pub defense: DefenseKind,
}

impl DefenseEntry {
    pub fn new(damage_type: DamageType, defense: DefenseKind) -> Self {
        Self {
            damage_type,
            defense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(
            "Immunity".parse::<DefenseKind>().unwrap(),
            DefenseKind::Immunity
        );
        assert_eq!(
            "RESISTANCE".parse::<DefenseKind>().unwrap(),
            DefenseKind::Resistance
        );
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!("vulnerability".parse::<DefenseKind>().is_err());
    }

    #[test]
    fn entry_uses_wire_field_names() {
        let entry = DefenseEntry::new(DamageType::Fire, DefenseKind::Immunity);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "fire");
        assert_eq!(json["defense"], "immunity");
    }

    #[test]
    fn entry_deserializes_from_wire_format() {
        let entry: DefenseEntry =
            serde_json::from_str(r#"{"type": "slashing", "defense": "resistance"}"#).unwrap();
        assert_eq!(entry.damage_type, DamageType::Slashing);
        assert_eq!(entry.defense, DefenseKind::Resistance);
    }
}
