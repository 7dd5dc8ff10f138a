//! Core utilities shared by every layer

// Macros first so the rest of the crate sees them
#[macro_use]
pub mod log;
pub mod random;
