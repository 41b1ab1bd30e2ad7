//! Value objects - immutable types defined by their attributes.

mod damage_type;
mod defense;
mod hit_points;
mod names;

pub use damage_type::DamageType;
pub use defense::{DefenseEntry, DefenseKind};
pub use hit_points::HitPointState;
pub use names::CharacterName;
