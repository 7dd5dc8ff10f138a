//! Systems - stateless rules and small state machines driven by the simulation
//!
//! - wave:      frame-skipped wave clock and per-cell phase
//! - hit_test:  pointer → cell lookup
//! - scheduler: "next frame" abstraction
//! - events:    host event stream
//! - tagline:   daily tagline rotation with persisted state

pub mod wave;
pub mod hit_test;
pub mod scheduler;
pub mod events;
pub mod tagline;
