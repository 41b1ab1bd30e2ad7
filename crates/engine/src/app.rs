//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::CharacterStore;
use crate::use_cases::{CharacterInfo, HitPointUseCases};

/// Main application state.
///
/// Wires the character store into the use cases; handlers receive it as
/// axum state. Constructed once at startup by the process entry point and
/// never looked up as ambient global state.
pub struct App {
    pub store: Arc<dyn CharacterStore>,
    pub hit_points: HitPointUseCases,
    pub info: Arc<CharacterInfo>,
}

impl App {
    /// Create a new App with all use cases wired to the given store.
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        let hit_points = HitPointUseCases::new(store.clone());
        let info = Arc::new(CharacterInfo::new(store.clone()));
        Self {
            store,
            hit_points,
            info,
        }
    }
}
