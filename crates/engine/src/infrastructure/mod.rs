//! Infrastructure - the character-store port and its SQLite adapter.

pub mod ports;
pub mod seed;
pub mod sqlite;
