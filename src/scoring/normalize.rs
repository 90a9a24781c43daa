use super::types::or_zero;

/// Maps `value` onto 0..=100 within `[min, max]`, clamping outside values.
///
/// An absent value counts as zero. A degenerate range (`max <= min`, or a
/// NaN bound) yields 0.0 instead of dividing by zero.
pub fn normalize(value: Option<f64>, min: f64, max: f64) -> f64 {
    if !matches!(max.partial_cmp(&min), Some(std::cmp::Ordering::Greater)) {
        return 0.0;
    }
    let clamped = or_zero(value).clamp(min, max);
    (clamped - min) / (max - min) * 100.0
}
