use wasm_bindgen::prelude::*;

use super::perf_stats::BackdropStats;
use super::{BackdropCore, DRAW_STRIDE};

/// JS handle for a backdrop whose frame loop the page drives itself.
/// For the self-driving variant see `mount_backdrop`.
#[wasm_bindgen]
pub struct HexBackdrop {
    core: BackdropCore,
}

#[wasm_bindgen]
impl HexBackdrop {
    /// Create a backdrop sized to the given viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: BackdropCore::new(width, height),
        }
    }

    /// Same, with a partial `GridSettings` JSON override
    #[wasm_bindgen(js_name = newWithSettings)]
    pub fn new_with_settings(json: String, width: f32, height: f32) -> Result<HexBackdrop, JsValue> {
        let core = BackdropCore::from_settings_json(&json, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.columns() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn wave_time(&self) -> f64 { self.core.wave_time() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.core.grid().cell_count() as u32 }

    pub fn is_mounted(&self) -> bool { self.core.is_mounted() }

    pub fn settings_json(&self) -> String { self.core.settings().to_json() }

    /// Enable or disable render timing (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame's counters
    pub fn get_perf_stats(&self) -> BackdropStats {
        self.core.get_perf_stats()
    }

    // === INPUT API ===

    /// Full viewport size (navbar included)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    pub fn hovered_row(&self) -> Option<u32> {
        self.core.hovered().map(|c| c.row)
    }

    pub fn hovered_column(&self) -> Option<u32> {
        self.core.hovered().map(|c| c.column)
    }

    // === FRAME API ===

    /// Advance one animation frame; true when a repaint is needed
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Stop the backdrop; later ticks and input are ignored
    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    // === RENDER API ===

    /// Rebuild the draw buffer; returns the number of visible cells
    pub fn collect_draws(&mut self) -> usize {
        self.core.collect_draws()
    }

    /// Get pointer to the packed draw buffer (for zero-copy JS reads)
    pub fn draw_ptr(&self) -> *const f32 {
        self.core.draw_ptr()
    }

    /// Length of the draw buffer in floats
    pub fn draw_len(&self) -> usize {
        self.core.draw_len()
    }

    pub fn draw_count(&self) -> usize {
        self.core.draws().len()
    }

    pub fn draw_stride(&self) -> usize {
        DRAW_STRIDE
    }

    /// Copy of the draw buffer (becomes a Float32Array)
    pub fn draw_buffer(&self) -> Vec<f32> {
        self.core.draw_buffer().to_vec()
    }

    pub fn cell_phase(&self, row: u32, column: u32) -> f32 {
        self.core.cell_phase(row, column)
    }

    // === SPRITE API (flat x,y pairs relative to the cell's top-left) ===

    pub fn sprite_outline(&self) -> Vec<f32> {
        self.core.sprite().outline_flat()
    }

    pub fn sprite_highlight(&self) -> Vec<f32> {
        self.core.sprite().highlight_flat()
    }

    pub fn sprite_neon_edge(&self) -> Vec<f32> {
        self.core.sprite().neon_edge_flat()
    }
}
