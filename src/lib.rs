//! Pouch — a personal link-saving manager with tag filtering, optimistic
//! undo-delete, and JSON/Pocket-CSV import and export.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod clock;
pub mod handler;
pub mod managers;
pub mod services;
pub mod store;
pub mod types;
