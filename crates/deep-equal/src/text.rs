//! Text-like canonicalization.
//!
//! A text-like value is anything that semantically represents a string:
//! a [`Value::Str`], a [`Value::Bytes`] holding 8-bit units, or a
//! [`Value::Chars`] holding 32-bit code points. All three normalize to
//! UTF-8 bytes, and two text-like values are equal iff their canonical
//! bytes are identical. Epsilon never applies to text.

use crate::value::Value;
use std::borrow::Cow;

/// Reports whether `v` has one of the text-like kinds.
pub(crate) fn is_text_like(v: &Value) -> bool {
    matches!(v, Value::Str(_) | Value::Bytes(_) | Value::Chars(_))
}

/// The canonical UTF-8 byte representation of a text-like value.
/// Returns `None` for non-text-like kinds.
pub(crate) fn canonical_bytes(v: &Value) -> Option<Cow<'_, [u8]>> {
    match v {
        Value::Str(s) => Some(Cow::Borrowed(s.as_bytes())),
        Value::Bytes(b) => Some(Cow::Borrowed(b.as_slice())),
        Value::Chars(c) => {
            let s: String = c.iter().collect();
            Some(Cow::Owned(s.into_bytes()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bytes_agree_across_representations() {
        let as_str = Value::from("héllo");
        let as_bytes = Value::from("héllo".as_bytes().to_vec());
        let as_chars = Value::chars("héllo");
        let s = canonical_bytes(&as_str).unwrap();
        let b = canonical_bytes(&as_bytes).unwrap();
        let c = canonical_bytes(&as_chars).unwrap();
        assert_eq!(s, b);
        assert_eq!(s, c);
    }

    #[test]
    fn non_text_kinds_have_no_bytes() {
        assert!(canonical_bytes(&Value::from(1)).is_none());
        assert!(canonical_bytes(&Value::Nil).is_none());
        assert!(!is_text_like(&Value::from(false)));
    }
}
