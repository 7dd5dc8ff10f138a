use crate::spatial::hex::CellCoord;
use crate::systems::wave::{edge_opacity, wave_phase};

use super::{BackdropCore, PerfTimer};

/// Floats per cell in the packed draw buffer:
/// `x, y, width, height, phase, opacity, hovered (0/1), cell index`
pub const DRAW_STRIDE: usize = 8;

/// One visible cell, ready to paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellDraw {
    pub row: u32,
    pub column: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub phase: f32,
    /// Opacity of the neon edge strokes
    pub opacity: f32,
    pub hovered: bool,
    /// Row-major index among all logical cells (culled ones included)
    pub index: u32,
}

impl CellDraw {
    #[inline]
    pub fn coord(&self) -> CellCoord {
        CellCoord { row: self.row, column: self.column }
    }

    #[inline]
    fn write_packed(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[
            self.x,
            self.y,
            self.width,
            self.height,
            self.phase,
            self.opacity,
            if self.hovered { 1.0 } else { 0.0 },
            self.index as f32,
        ]);
    }
}

pub(super) fn collect_draws(core: &mut BackdropCore) -> usize {
    let timer = if core.perf_enabled { Some(PerfTimer::start()) } else { None };

    core.draws.clear();
    core.draw_buffer.clear();
    if !core.mounted {
        return 0;
    }

    let (width, height, spread) = {
        let s = core.grid.settings();
        (s.cell_width, s.cell_height, s.phase_spread)
    };
    let wave_time = core.wave.time();
    let hovered = core.hovered;

    let mut total = 0u32;
    let mut culled = 0u32;
    for (index, pos) in core.grid.cells().enumerate() {
        total += 1;
        if !core.grid.is_visible(&pos) {
            culled += 1;
            continue;
        }
        let phase = wave_phase(wave_time, pos.row, pos.column, spread);
        let draw = CellDraw {
            row: pos.row,
            column: pos.column,
            x: pos.x,
            y: pos.y,
            width,
            height,
            phase,
            opacity: edge_opacity(phase),
            hovered: hovered == Some(pos.coord()),
            index: index as u32,
        };
        draw.write_packed(&mut core.draw_buffer);
        core.draws.push(draw);
    }

    core.stats.cells_total = total;
    core.stats.cells_culled = culled;
    core.stats.cells_drawn = core.draws.len() as u32;
    if let Some(timer) = timer {
        core.stats.render_ms = timer.elapsed_ms();
    }

    core.draws.len()
}

pub(super) fn cell_phase(core: &BackdropCore, row: u32, column: u32) -> f32 {
    wave_phase(core.wave.time(), row, column, core.grid.settings().phase_spread)
}
