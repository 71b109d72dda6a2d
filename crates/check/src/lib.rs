//! deep-check — minimal assertion helpers for equality and non-equality.
//!
//! Wraps [`deep_equal`] in six entry points: [`eq`], [`eq_exact`] and
//! [`eq_eps`] fail when the values differ, [`neq`], [`neq_exact`] and
//! [`neq_eps`] fail when they are equal. Failures are reported through the
//! [`Tester`] collaborator as a single formatted message; nothing here
//! panics.
//!
//! ```
//! use deep_check::{eq, Tester};
//!
//! struct Collect(Vec<String>);
//! impl Tester for Collect {
//!     fn errorf(&mut self, msg: &str) {
//!         self.0.push(msg.to_string());
//!     }
//! }
//!
//! let mut t = Collect(Vec::new());
//! eq(&mut t, 1, 2, &[&"sum"]);
//! assert_eq!(t.0, vec!["sum: 1 != 2"]);
//! ```

use std::fmt::Display;

pub use deep_equal::{deep_equal, deep_equal_exact, Value};

/// Default tolerance for floating-point and complex comparison in the
/// [`eq`]/[`neq`] convenience entry points.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Failure-reporting collaborator. Test frameworks implement this to
/// collect or print assertion failures.
pub trait Tester {
    /// Records one formatted assertion failure.
    fn errorf(&mut self, msg: &str);

    /// Optional capability: marks the current frame as a helper so that
    /// failures are attributed to the caller's call site. The default
    /// does nothing; correctness never depends on it.
    fn helper(&mut self) {}
}

/// Checks `a` and `b` for deep equality with the default epsilon of 1e-6
/// and reports a failure to `t` if they differ.
///
/// `msg` parts, if any, are concatenated and printed before the error,
/// e.g. `["input ", 5]` produces `"input 5: <error>"`.
pub fn eq<A, B>(t: &mut impl Tester, a: A, b: B, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    eq_eps(t, a, b, DEFAULT_EPSILON, msg);
}

/// Checks `a` and `b` for deep equality, requiring floats and complex
/// values to match exactly, and reports a failure to `t` if they differ.
pub fn eq_exact<A, B>(t: &mut impl Tester, a: A, b: B, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    eq_eps(t, a, b, 0.0, msg);
}

/// Checks `a` and `b` for deep equality with tolerance `epsilon` and
/// reports a failure to `t` if they differ.
pub fn eq_eps<A, B>(t: &mut impl Tester, a: A, b: B, epsilon: f64, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    let (a, b) = (a.into(), b.into());
    if !deep_equal(&a, &b, epsilon) {
        errorf(t, "!=", &a, &b, msg);
    }
}

/// Checks `a` and `b` for deep equality with the default epsilon of 1e-6
/// and reports a failure to `t` if they are equal.
pub fn neq<A, B>(t: &mut impl Tester, a: A, b: B, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    neq_eps(t, a, b, DEFAULT_EPSILON, msg);
}

/// Checks `a` and `b` for deep equality, requiring floats and complex
/// values to match exactly, and reports a failure to `t` if they are equal.
pub fn neq_exact<A, B>(t: &mut impl Tester, a: A, b: B, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    neq_eps(t, a, b, 0.0, msg);
}

/// Checks `a` and `b` for deep equality with tolerance `epsilon` and
/// reports a failure to `t` if they are equal.
pub fn neq_eps<A, B>(t: &mut impl Tester, a: A, b: B, epsilon: f64, msg: &[&dyn Display])
where
    A: Into<Value>,
    B: Into<Value>,
{
    t.helper();
    let (a, b) = (a.into(), b.into());
    if deep_equal(&a, &b, epsilon) {
        errorf(t, "==", &a, &b, msg);
    }
}

fn errorf(t: &mut impl Tester, op: &str, a: &Value, b: &Value, msg: &[&dyn Display]) {
    t.helper();
    let mut out = String::new();
    if !msg.is_empty() {
        for part in msg {
            out.push_str(&part.to_string());
        }
        out.push_str(": ");
    }
    out.push_str(&format!("{a} {op} {b}"));
    t.errorf(&out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        failures: Vec<String>,
        helper_calls: usize,
    }

    impl Tester for Recorder {
        fn errorf(&mut self, msg: &str) {
            self.failures.push(msg.to_string());
        }

        fn helper(&mut self) {
            self.helper_calls += 1;
        }
    }

    #[test]
    fn eq_passes_silently() {
        let mut t = Recorder::default();
        eq(&mut t, 3, 3, &[]);
        assert!(t.failures.is_empty());
    }

    #[test]
    fn eq_failure_message_without_prefix() {
        let mut t = Recorder::default();
        eq(&mut t, 1, 2, &[]);
        assert_eq!(t.failures, vec!["1 != 2"]);
    }

    #[test]
    fn eq_failure_message_with_prefix() {
        let mut t = Recorder::default();
        eq(&mut t, 1, 2, &[&"sum"]);
        assert_eq!(t.failures, vec!["sum: 1 != 2"]);
    }

    #[test]
    fn neq_failure_message() {
        let mut t = Recorder::default();
        neq(&mut t, 1, 1, &[&"x"]);
        assert_eq!(t.failures, vec!["x: 1 == 1"]);
    }

    #[test]
    fn prefix_parts_are_concatenated() {
        let mut t = Recorder::default();
        eq(&mut t, 1, 2, &[&"input ", &5]);
        assert_eq!(t.failures, vec!["input 5: 1 != 2"]);
    }

    #[test]
    fn helper_capability_is_invoked() {
        let mut t = Recorder::default();
        eq(&mut t, 1, 1, &[]);
        assert!(t.helper_calls > 0);
    }
}
