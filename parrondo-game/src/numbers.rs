//! Numeric conversion helpers centralizing checked casts.

use num_traits::cast::cast;

/// Convert a state index or count to f64, returning 0.0 if it cannot be represented.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert a counter to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Round half-to-even and convert to i64, returning `None` for NaN or out-of-range values.
#[must_use]
pub fn round_to_i64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    cast::<f64, i64>(value.round_ties_even())
}
