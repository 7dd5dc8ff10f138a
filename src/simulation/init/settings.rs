use super::perf_stats::BackdropStats;
use super::BackdropCore;

pub(super) fn enable_perf_metrics(core: &mut BackdropCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.stats.render_ms = 0.0;
    }
}

pub(super) fn get_perf_stats(core: &BackdropCore) -> BackdropStats {
    let mut stats = core.stats.clone();
    stats.frame = core.wave.frame();
    stats.wave_ticks = core.wave.ticks();
    stats
}
