//! Hexfolio Engine - hexagon backdrop and daily tagline for the portfolio landing page
//!
//! Architecture:
//! - core/          - Logging macros, PRNG
//! - domain/        - Settings and the tagline set
//! - spatial/       - Hex grid geometry and cell sprite
//! - systems/       - Wave clock, hit-testing, scheduling, events, tagline rotation
//! - simulation/    - Backdrop orchestration (native-testable) + wasm facade
//! - api/           - Public JS API and browser adapters

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("hexfolio engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{HexBackdrop, TaglineRotator};
pub use domain::settings::{GridSettings, HourGuard, RotationSettings};
pub use simulation::{BackdropCore, BackdropStats, CellDraw, DRAW_STRIDE};
pub use spatial::hex::{CellCoord, CellPosition, GridDimensions, HexGrid, Viewport};
pub use systems::tagline::{TaglineService, TaglineState};

#[cfg(target_arch = "wasm32")]
pub use api::host::{mount_backdrop, mount_tagline, BackdropMount, TaglineMount};

// Layout constants for JS readers of the draw buffer
#[wasm_bindgen]
pub fn draw_stride() -> u32 { DRAW_STRIDE as u32 }
#[wasm_bindgen]
pub fn tagline_poll_interval_ms() -> u32 { domain::settings::POLL_INTERVAL_MS }
