use rand::Rng;

/// Draw a value from the inclusive range `[lo, hi]` in whole-unit steps from `lo`.
///
/// For integer bounds with `lo <= hi` the result is a uniformly distributed
/// integer covering both endpoints. `lo == hi` always yields `lo`. Reversed
/// bounds never panic, but the magnitude of the result is unspecified.
#[inline]
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    let [lo, hi] = range;
    let span = f64::from(hi) - f64::from(lo) + 1.0;
    let u: f64 = rng.gen();
    ((u * span).floor() + f64::from(lo)) as f32
}

/// Round half toward positive infinity, like `Math.round` in the browser.
#[inline]
pub fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}
