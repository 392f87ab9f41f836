//! Exponential smoothing of successive TTLs.

/// Blend `previous` and `fresh`: `round(previous × weight + fresh × (1 − weight))`.
///
/// `weight` is the share kept from the previous value and must be in `[0, 1]`.
///
/// The complement is snapped to nine decimals, so a weight of `0.7` pairs
/// with exactly `0.3` and half-way results round the same as the literal form.
pub fn blend(previous: u64, fresh: u64, weight: f64) -> u64 {
    let blended = previous as f64 * weight + fresh as f64 * complement(weight);
    blended.round() as u64
}

fn complement(weight: f64) -> f64 {
    ((1.0 - weight) * 1e9).round() / 1e9
}
