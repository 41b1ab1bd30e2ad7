//! Damage type vocabulary shared by attacks and defenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The canonical damage types an attack or defense can carry.
///
/// Parsing is case-insensitive ("Fire", "FIRE" and "fire" are the same type);
/// the canonical stored and serialized form is the lower-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
    Fire,
    Cold,
    Acid,
    Thunder,
    Lightning,
    Poison,
    Radiant,
    Necrotic,
    Psychic,
    Force,
}

impl DamageType {
    /// All thirteen canonical damage types.
    pub const ALL: [DamageType; 13] = [
        DamageType::Bludgeoning,
        DamageType::Piercing,
        DamageType::Slashing,
        DamageType::Fire,
        DamageType::Cold,
        DamageType::Acid,
        DamageType::Thunder,
        DamageType::Lightning,
        DamageType::Poison,
        DamageType::Radiant,
        DamageType::Necrotic,
        DamageType::Psychic,
        DamageType::Force,
    ];

    /// Returns the canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Bludgeoning => "bludgeoning",
            DamageType::Piercing => "piercing",
            DamageType::Slashing => "slashing",
            DamageType::Fire => "fire",
            DamageType::Cold => "cold",
            DamageType::Acid => "acid",
            DamageType::Thunder => "thunder",
            DamageType::Lightning => "lightning",
            DamageType::Poison => "poison",
            DamageType::Radiant => "radiant",
            DamageType::Necrotic => "necrotic",
            DamageType::Psychic => "psychic",
            DamageType::Force => "force",
        }
    }

    /// Returns true if `value` names a canonical damage type, ignoring case.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<DamageType>().is_ok()
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DamageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bludgeoning" => Ok(DamageType::Bludgeoning),
            "piercing" => Ok(DamageType::Piercing),
            "slashing" => Ok(DamageType::Slashing),
            "fire" => Ok(DamageType::Fire),
            "cold" => Ok(DamageType::Cold),
            "acid" => Ok(DamageType::Acid),
            "thunder" => Ok(DamageType::Thunder),
            "lightning" => Ok(DamageType::Lightning),
            "poison" => Ok(DamageType::Poison),
            "radiant" => Ok(DamageType::Radiant),
            "necrotic" => Ok(DamageType::Necrotic),
            "psychic" => Ok(DamageType::Psychic),
            "force" => Ok(DamageType::Force),
            _ => Err(DomainError::parse(format!("unknown damage type: {}", s))),
        }
    }
}
