//! deep-equal — epsilon-aware deep equality over dynamic values.
//!
//! Compares two [`Value`] graphs structurally, with coercion rules that go
//! beyond strict type equality: integers of any signedness and width compare
//! by numeric value, floating-point and complex numbers compare within a
//! caller-supplied epsilon (NaN matches NaN, infinities match by sign), and
//! the three text-like representations (string, byte sequence, code-point
//! sequence) compare by their canonical UTF-8 bytes.
//!
//! Composite values recurse; reference-bearing kinds (lists, maps,
//! indirections, boxed values) are tracked in a visited set so that cyclic
//! graphs terminate.
//!
//! The comparator is total: it never panics and never loops, every
//! irreconcilable mismatch is simply `false`.

mod deep_equal;
mod num;
mod text;
mod value;

pub use deep_equal::{deep_equal, deep_equal_exact};
pub use num::float_eq;
pub use value::Value;
