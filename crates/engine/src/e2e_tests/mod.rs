//! End-to-end tests over the HTTP router.
//!
//! These tests exercise the full request path (routing, extractors, use
//! cases, SQLite store) against an in-memory database seeded with a test
//! character, asserting on the exact JSON bodies clients see.

mod helpers;

pub use helpers::*;
