// Pouch shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod filter;
pub mod import;
pub mod link;
pub mod request;
