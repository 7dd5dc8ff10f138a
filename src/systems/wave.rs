//! Traveling brightness wave
//!
//! A single time accumulator advances by `wave_step` once every `frame_skip`
//! frames. Each cell samples a sine lagged by `(row + column) * spread`, so
//! the bright band drifts diagonally across the grid.

/// Neon edges never fade below this opacity
pub const EDGE_OPACITY_FLOOR: f32 = 0.2;

/// Phase in [0, 1] for a cell at the given wave time
#[inline]
pub fn wave_phase(wave_time: f64, row: u32, column: u32, spread: f32) -> f32 {
    let lag = (row as f64 + column as f64) * spread as f64;
    ((wave_time - lag).sin() * 0.5 + 0.5) as f32
}

/// Opacity of the two neon edge strokes
#[inline]
pub fn edge_opacity(phase: f32) -> f32 {
    EDGE_OPACITY_FLOOR + (1.0 - EDGE_OPACITY_FLOOR) * phase
}

#[derive(Clone, Debug)]
pub struct WaveClock {
    frame: u64,
    time: f64,
    ticks: u64,
    frame_skip: u32,
    step: f64,
}

impl WaveClock {
    pub fn new(frame_skip: u32, step: f32) -> Self {
        Self {
            frame: 0,
            time: 0.0,
            ticks: 0,
            frame_skip: frame_skip.max(1),
            step: step as f64,
        }
    }

    /// Count one animation frame; returns true when the wave time moved
    pub fn advance(&mut self) -> bool {
        self.frame += 1;
        if self.frame % self.frame_skip as u64 == 0 {
            self.time += self.step;
            self.ticks += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn time(&self) -> f64 { self.time }

    #[inline]
    pub fn frame(&self) -> u64 { self.frame }

    /// Number of times the wave time has advanced
    #[inline]
    pub fn ticks(&self) -> u64 { self.ticks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_is_bounded_for_any_time() {
        let mut t = -50.0;
        while t < 50.0 {
            for row in 0..20 {
                for col in 0..25 {
                    let p = wave_phase(t, row, col, 0.4);
                    assert!((0.0..=1.0).contains(&p), "phase {} at t={}", p, t);
                    let o = edge_opacity(p);
                    assert!((EDGE_OPACITY_FLOOR..=1.0).contains(&o));
                }
            }
            t += 0.37;
        }
    }

    #[test]
    fn phase_travels_diagonally() {
        // (1,0) and (0,1) share a diagonal, so they share a phase
        assert_eq!(wave_phase(2.5, 1, 0, 0.4), wave_phase(2.5, 0, 1, 0.4));
        // one diagonal step later in time catches up with the next diagonal
        let here = wave_phase(1.0, 0, 0, 0.4);
        let later = wave_phase(1.4, 1, 0, 0.4);
        assert!((here - later).abs() < 1e-6);
    }

    #[test]
    fn clock_advances_once_every_three_frames() {
        let mut clock = WaveClock::new(3, 0.036);
        assert!(!clock.advance());
        assert!(!clock.advance());
        assert!(clock.advance());
        for _ in 0..6 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 9);
        assert_eq!(clock.ticks(), 3);
        assert!((clock.time() - 3.0 * 0.036).abs() < 1e-6);
    }

    #[test]
    fn zero_frame_skip_is_treated_as_one() {
        let mut clock = WaveClock::new(0, 0.5);
        assert!(clock.advance());
        assert_eq!(clock.time(), 0.5);
    }
}
