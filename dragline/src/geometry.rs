//! Duration scaling and scroll-edge easing.

/// Settle/swap duration for a displacement of one nominal distance unit.
pub const NOMINAL_SETTLE_DURATION_MS: u64 = 150;
/// Lower bound for settle/swap animations.
pub const MIN_SETTLE_DURATION_MS: u64 = NOMINAL_SETTLE_DURATION_MS;
/// Upper bound for settle/swap animations.
pub const MAX_SETTLE_DURATION_MS: u64 = NOMINAL_SETTLE_DURATION_MS * 2;
/// The nominal distance unit, in density-independent pixels.
pub const NOMINAL_DISTANCE_DP: f32 = 20.0;

/// Converts density-independent pixels to whole pixels, rounding to nearest.
pub fn dp_to_px(dp: f32, density: f32) -> i32 {
    (dp * density + 0.5) as i32
}

/// A linear relationship between distance and duration, bounded both ways.
///
/// `nominal_distance` is the distance (in pixels) that maps to
/// [`NOMINAL_SETTLE_DURATION_MS`]. A non-positive unit yields the upper bound for any non-zero
/// distance.
pub fn settle_duration(distance: i32, nominal_distance: i32) -> u64 {
    let abs = distance.unsigned_abs();
    if abs == 0 {
        return MIN_SETTLE_DURATION_MS;
    }
    if nominal_distance <= 0 {
        return MAX_SETTLE_DURATION_MS;
    }
    let scaled = (NOMINAL_SETTLE_DURATION_MS as f32 * abs as f32 / nominal_distance as f32) as u64;
    scaled.clamp(MIN_SETTLE_DURATION_MS, MAX_SETTLE_DURATION_MS)
}

/// Ken Perlin's quintic smoothstep of `x` between `edge0` and `edge1`.
///
/// The edges may be given in descending order, in which case the curve rises as `x` moves
/// from `edge0` down towards `edge1`. Degenerate edges yield `0.0`.
pub fn smoother_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span == 0.0 {
        return 0.0;
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
