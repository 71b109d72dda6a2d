//! Numeric comparison helpers.
//!
//! All numeric cross-kind rules live here: epsilon-aware float equality,
//! the sign-aware signed/unsigned integer check, and integer-to-float
//! promotion. Everything is pure classification, no side effects.

use crate::value::Value;

/// Compares two doubles with tolerance `eps`.
///
/// Both positive infinities, both negative infinities, and NaN against NaN
/// are equal; NaN-equals-NaN is a deliberate deviation from IEEE semantics
/// so that tests can assert equality of NaN-producing computations.
/// Otherwise the values are equal iff `|a - b| <= eps`; `eps == 0` gives
/// exact comparison (modulo the NaN/Inf rules above).
///
/// # Example
///
/// ```
/// use deep_equal::float_eq;
///
/// assert!(float_eq(1.0, 1.25, 0.25));
/// assert!(!float_eq(1.0, 1.25, 0.2));
/// assert!(float_eq(f64::NAN, f64::NAN, 0.0));
/// assert!(float_eq(f64::INFINITY, f64::INFINITY, 0.0));
/// assert!(!float_eq(f64::INFINITY, f64::NEG_INFINITY, 0.0));
/// ```
pub fn float_eq(a: f64, b: f64, eps: f64) -> bool {
    (a == f64::INFINITY && b == f64::INFINITY)
        || (a == f64::NEG_INFINITY && b == f64::NEG_INFINITY)
        || (a.is_nan() && b.is_nan())
        || (a - b).abs() <= eps
}

/// Compares a signed and an unsigned integer by numeric value.
///
/// An unsigned value is never negative, so a negative signed operand is
/// immediately unequal; otherwise both sides are compared in the `u64`
/// domain, which keeps values above `i64::MAX` from being misread.
pub fn int_uint_eq(i: i64, u: u64) -> bool {
    if i < 0 {
        return false;
    }
    i as u64 == u
}

/// Reports whether `v` is one of the integer kinds.
pub(crate) fn is_integer(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::UInt(_))
}

/// Extracts an integer kind as `f64` for integer-vs-float comparison.
/// Returns `None` for non-integer kinds.
pub(crate) fn int_to_float(v: &Value) -> Option<f64> {
    match v {
        Value::Int(i) => Some(*i as f64),
        Value::UInt(u) => Some(*u as f64),
        _ => None,
    }
}
