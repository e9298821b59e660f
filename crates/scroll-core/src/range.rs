use crate::error::EffectError;

/// Position of `value` inside `[min, max]` as a fraction (0 at `min`, 1 at `max`).
///
/// Not clamped: values outside the range map outside `[0, 1]`.
/// A zero-width range is rejected instead of producing NaN or infinity.
#[inline]
pub fn to_percent(value: f64, min: f64, max: f64) -> Result<f64, EffectError> {
    let span = max - min;
    if span == 0.0 {
        return Err(EffectError::DegenerateRange { min, max });
    }
    Ok((value - min) / span)
}

/// Inverse of [`to_percent`]: the point `percent` of the way from `min` to `max`.
#[inline]
pub fn to_range(percent: f64, min: f64, max: f64) -> f64 {
    (max - min) * percent + min
}
