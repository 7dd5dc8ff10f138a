//! Public JS API
//!
//! - wasm: `#[wasm_bindgen]` types usable from any host (and natively in tests)
//! - host: browser adapters (listeners, rAF, intervals, localStorage); wasm32 only

pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub mod host;
