use crate::domain::settings::GridSettings;
use crate::spatial::hex::HexGrid;
use crate::spatial::sprite::HexSprite;
use crate::systems::wave::WaveClock;

use super::perf_stats::BackdropStats;
use super::BackdropCore;

pub(super) fn create_backdrop_core(settings: GridSettings, width: f32, height: f32) -> BackdropCore {
    let wave = WaveClock::new(settings.frame_skip, settings.wave_step);
    let sprite = HexSprite::from_settings(&settings);
    let grid = HexGrid::with_viewport(settings, width, height);
    let capacity = grid.cell_count();

    BackdropCore {
        grid,
        wave,
        sprite,
        hovered: None,
        pointer: None,
        mounted: true,
        draws: Vec::with_capacity(capacity),
        draw_buffer: Vec::with_capacity(capacity * super::DRAW_STRIDE),
        perf_enabled: false,
        stats: BackdropStats::default(),
    }
}
