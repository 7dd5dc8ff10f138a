use wasm_bindgen::prelude::*;

/// Counters for the most recent frame / render pass
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackdropStats {
    pub(super) frame: u64,
    pub(super) wave_ticks: u64,
    pub(super) cells_total: u32,
    pub(super) cells_drawn: u32,
    pub(super) cells_culled: u32,
    pub(super) hit_test_scans: u32,
    pub(super) resizes: u32,
    /// Only measured while perf metrics are enabled
    pub(super) render_ms: f64,
}

#[wasm_bindgen]
impl BackdropStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn wave_ticks(&self) -> u64 { self.wave_ticks }
    #[wasm_bindgen(getter)]
    pub fn cells_total(&self) -> u32 { self.cells_total }
    #[wasm_bindgen(getter)]
    pub fn cells_drawn(&self) -> u32 { self.cells_drawn }
    #[wasm_bindgen(getter)]
    pub fn cells_culled(&self) -> u32 { self.cells_culled }
    #[wasm_bindgen(getter)]
    pub fn hit_test_scans(&self) -> u32 { self.hit_test_scans }
    #[wasm_bindgen(getter)]
    pub fn resizes(&self) -> u32 { self.resizes }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
}
