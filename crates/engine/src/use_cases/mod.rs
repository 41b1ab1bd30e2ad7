//! Use cases - user story orchestration over the character store.

pub mod hit_points;
pub mod info;

pub use hit_points::HitPointUseCases;
pub use info::CharacterInfo;
