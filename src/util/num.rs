/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a finite, integral, non-negative `f64` to `usize`.
///
/// ## Returns
/// - `Some(usize)`: The converted value if it is safe.
/// - `None`: For non-finite, negative, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use tuplecalc::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(7.0), Some(7));
/// assert_eq!(f64_to_usize_checked(-1.0), None);
/// assert_eq!(f64_to_usize_checked(1.5), None);
/// assert_eq!(f64_to_usize_checked(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_usize_checked(value: f64) -> Option<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }

    usize::try_from(value as u64).ok()
}
