//! Backdrop - animated hexagon grid behind the landing page
//!
//! `BackdropCore` only orchestrates; the rules live elsewhere:
//! - geometry in spatial/hex.rs
//! - wave clock and phase in systems/wave.rs
//! - hit-testing in systems/hit_test.rs
//!
//! It is plain Rust so the whole loop can be driven natively in tests;
//! `HexBackdrop` (facade.rs) is the wasm-bindgen wrapper.

use crate::domain::settings::GridSettings;
use crate::spatial::hex::{CellCoord, GridDimensions, HexGrid, Viewport};
use crate::spatial::sprite::HexSprite;
use crate::systems::events::{EventSource, HostEvent};
use crate::systems::scheduler::FrameScheduler;
use crate::systems::wave::WaveClock;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::HexBackdrop;
pub use perf_stats::BackdropStats;
pub use render_extract::{CellDraw, DRAW_STRIDE};

use perf_timer::PerfTimer;

/// The backdrop state machine: mounted → (frames, resizes, pointer moves)* → torn down
pub struct BackdropCore {
    grid: HexGrid,
    wave: WaveClock,
    sprite: HexSprite,

    // Interaction
    hovered: Option<CellCoord>,
    pointer: Option<(f32, f32)>,
    mounted: bool,

    // Render transfer
    draws: Vec<CellDraw>,
    draw_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    stats: BackdropStats,
}

impl BackdropCore {
    /// Backdrop with the landing page settings, sized to the given viewport
    pub fn new(width: f32, height: f32) -> Self {
        init::create_backdrop_core(GridSettings::default(), width, height)
    }

    pub fn with_settings(settings: GridSettings, width: f32, height: f32) -> Result<Self, String> {
        settings.validate()?;
        Ok(init::create_backdrop_core(settings, width, height))
    }

    pub fn from_settings_json(json: &str, width: f32, height: f32) -> Result<Self, String> {
        let settings = GridSettings::from_json(json)?;
        Ok(init::create_backdrop_core(settings, width, height))
    }

    // === Geometry ===

    pub fn grid(&self) -> &HexGrid { &self.grid }

    pub fn settings(&self) -> &GridSettings { self.grid.settings() }

    pub fn dimensions(&self) -> GridDimensions { self.grid.dimensions() }

    pub fn columns(&self) -> u32 { self.grid.dimensions().columns }

    pub fn rows(&self) -> u32 { self.grid.dimensions().rows }

    pub fn viewport(&self) -> Viewport { self.grid.viewport() }

    pub fn sprite(&self) -> &HexSprite { &self.sprite }

    // === State ===

    pub fn hovered(&self) -> Option<CellCoord> { self.hovered }

    pub fn wave_time(&self) -> f64 { self.wave.time() }

    pub fn frame(&self) -> u64 { self.wave.frame() }

    pub fn is_mounted(&self) -> bool { self.mounted }

    /// Enable or disable render timing (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Snapshot of the last frame's counters
    pub fn get_perf_stats(&self) -> BackdropStats {
        settings::get_perf_stats(self)
    }

    // === Host input ===

    /// Viewport changed: recompute dimensions and re-resolve the hovered cell
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y)
    }

    pub fn pointer_leave(&mut self) {
        commands::pointer_leave(self)
    }

    /// Apply one host event; returns false once torn down
    pub fn handle_event<S: FrameScheduler + ?Sized>(&mut self, event: HostEvent, scheduler: &mut S) -> bool {
        commands::handle_event(self, event, scheduler)
    }

    /// Drain an event source; returns the number of events applied
    pub fn pump<E, S>(&mut self, source: &mut E, scheduler: &mut S) -> usize
    where
        E: EventSource + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        commands::pump(self, source, scheduler)
    }

    // === Animation loop ===

    /// Count one frame; returns true when the wave time moved (repaint needed)
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// Run the first frame now and schedule the next
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        step::start(self, scheduler)
    }

    /// Frame callback body: tick, then ask for another frame while mounted
    pub fn run_frame<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        step::run_frame(self, scheduler)
    }

    /// Stop reacting to events and frames
    pub fn teardown(&mut self) {
        step::teardown(self)
    }

    /// Teardown plus cancelling the pending frame
    pub fn teardown_with<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        step::teardown_with(self, scheduler)
    }

    // === Rendering ===

    /// Rebuild draw instructions for every visible cell; returns the count
    pub fn collect_draws(&mut self) -> usize {
        render_extract::collect_draws(self)
    }

    pub fn draws(&self) -> &[CellDraw] { &self.draws }

    /// Packed draws, `DRAW_STRIDE` floats per cell
    pub fn draw_buffer(&self) -> &[f32] { &self.draw_buffer }

    /// Get pointer to the packed draw buffer (for JS rendering)
    pub fn draw_ptr(&self) -> *const f32 { self.draw_buffer.as_ptr() }

    pub fn draw_len(&self) -> usize { self.draw_buffer.len() }

    /// Current wave phase of any logical cell
    pub fn cell_phase(&self, row: u32, column: u32) -> f32 {
        render_extract::cell_phase(self, row, column)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
