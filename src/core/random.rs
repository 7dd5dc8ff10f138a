//! Small deterministic PRNG (xorshift32)
//!
//! The tagline re-roll only needs "uniform enough" picks from a handful of
//! entries; seeding is left to the host so tests stay reproducible.

/// Advance the state and return the next value. State must be non-zero.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Turn any u32 into a usable seed (zero is a fixed point of xorshift)
#[inline]
pub fn normalize_seed(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

/// Seed from a float in [0, 1) such as `Math.random()`
pub fn seed_from_unit(value: f64) -> u32 {
    let scaled = (value.clamp(0.0, 1.0) * u32::MAX as f64) as u32;
    normalize_seed(scaled)
}

/// Pick an index in `0..len`; returns 0 for an empty range
#[inline]
pub fn pick_index(state: &mut u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (xorshift32(state) as usize) % len
}
