//! HP Trackr Engine library.
//!
//! This crate contains all server-side code for the hit-point tracking
//! service.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (damage, heal, temp HP, info)
//! - `infrastructure/` - The character-store port and its SQLite adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests over the HTTP router with an in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
