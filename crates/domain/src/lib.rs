//! HP Trackr domain: character vitals, defense profiles, and the combat math
//! that turns an incoming attack into a hit-point change.
//!
//! This crate is pure: no I/O, no async, no store. The engine crate owns
//! persistence and transport and calls into these rules.

pub mod combat;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use combat::{hit_point_loss, resolve_damage, temp_remaining, Attack};
pub use entities::{AbilityScores, Character, CharacterClass, CharacterSheet, Item, ItemModifier};
pub use error::DomainError;
pub use value_objects::{CharacterName, DamageType, DefenseEntry, DefenseKind, HitPointState};
