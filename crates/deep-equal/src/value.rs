//! [`Value`] — the dynamic value model the comparator operates on.
//!
//! A closed tagged union covering every kind [`deep_equal`] understands.
//! Construction from concrete Rust types is the caller's job, via the
//! `From` impls and the constructor helpers below; the comparator itself
//! stays statically typed over this enum.
//!
//! [`deep_equal`]: crate::deep_equal

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed value.
///
/// Reference-bearing kinds ([`List`](Value::List), [`Map`](Value::Map),
/// [`Ref`](Value::Ref), [`Any`](Value::Any)) carry their payload behind an
/// `Rc`, which gives them a stable identity: cloning a `Value` shares the
/// underlying storage, and the comparator uses the `Rc` address both for
/// identical-storage short-circuits and for cycle detection.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value (nil/none).
    Nil,
    Bool(bool),
    /// Signed integer, any source width canonicalized to 64 bits.
    Int(i64),
    /// Unsigned integer, any source width canonicalized to 64 bits.
    UInt(u64),
    Float(f64),
    Complex { re: f64, im: f64 },
    /// Text stored as a string.
    Str(String),
    /// Text or binary data stored as 8-bit units.
    Bytes(Vec<u8>),
    /// Text stored as 32-bit code points.
    Chars(Vec<char>),
    /// Ordered fixed-length sequence; the length is part of the type.
    Tuple(Vec<Value>),
    /// Ordered variable-length sequence; `None` is the nil list.
    List(Option<Rc<RefCell<Vec<Value>>>>),
    /// Keyed mapping with unique keys; `None` is the nil map.
    Map(Option<Rc<RefCell<IndexMap<String, Value>>>>),
    /// Ordered record with named fields in declaration order.
    Record {
        type_name: &'static str,
        fields: Vec<(&'static str, Value)>,
    },
    /// Nullable single-target indirection.
    Ref(Option<Rc<RefCell<Value>>>),
    /// Nullable tagged wrapper around a boxed value.
    Any(Option<Rc<Value>>),
    /// Callable; the payload is an opaque identity token, `None` is the
    /// nil callable.
    Func(Option<u64>),
    /// Opaque raw address.
    Addr(usize),
}

impl Value {
    /// Builds a non-nil list from an iterator of values.
    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::List(Some(Rc::new(RefCell::new(items.into_iter().collect()))))
    }

    /// The nil list, distinct from `Value::list([])` only by nil-ness.
    pub fn nil_list() -> Value {
        Value::List(None)
    }

    /// Builds a non-nil map from an iterator of key/value pairs. Later
    /// duplicates overwrite earlier ones.
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map: IndexMap<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        Value::Map(Some(Rc::new(RefCell::new(map))))
    }

    /// The nil map. Unlike lists, a nil map never equals an empty one.
    pub fn nil_map() -> Value {
        Value::Map(None)
    }

    /// Builds a record with named fields in declaration order.
    pub fn record(type_name: &'static str, fields: Vec<(&'static str, Value)>) -> Value {
        Value::Record { type_name, fields }
    }

    /// Builds an indirection pointing at `target`.
    pub fn reference(target: Value) -> Value {
        Value::Ref(Some(Rc::new(RefCell::new(target))))
    }

    /// The nil indirection.
    pub fn nil_ref() -> Value {
        Value::Ref(None)
    }

    /// Boxes a value into a tagged wrapper.
    pub fn any(value: Value) -> Value {
        Value::Any(Some(Rc::new(value)))
    }

    /// The nil tagged wrapper.
    pub fn nil_any() -> Value {
        Value::Any(None)
    }

    /// A callable with the given identity token.
    pub fn func(id: u64) -> Value {
        Value::Func(Some(id))
    }

    /// The nil callable.
    pub fn nil_func() -> Value {
        Value::Func(None)
    }

    /// Text stored as 32-bit code points.
    pub fn chars(s: &str) -> Value {
        Value::Chars(s.chars().collect())
    }

    /// A complex number.
    pub fn complex(re: f64, im: f64) -> Value {
        Value::Complex { re, im }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Value {
                Value::Int(v as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Value {
                Value::UInt(v as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Value {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Value {
        Value::Bytes(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::map(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

// Rendering depth is capped so that Display terminates on cyclic graphs.
const MAX_RENDER_DEPTH: usize = 32;

fn write_value(f: &mut fmt::Formatter<'_>, v: &Value, depth: usize) -> fmt::Result {
    if depth > MAX_RENDER_DEPTH {
        return write!(f, "...");
    }
    match v {
        Value::Nil => write!(f, "nil"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::UInt(n) => write!(f, "{n}"),
        Value::Float(n) => write!(f, "{n}"),
        Value::Complex { re, im } => write!(f, "({re}{im:+}i)"),
        Value::Str(s) => write!(f, "{s:?}"),
        Value::Bytes(b) => write!(f, "bytes({b:?})"),
        Value::Chars(c) => {
            let s: String = c.iter().collect();
            write!(f, "chars({s:?})")
        }
        Value::Tuple(items) => write_seq(f, items, depth),
        Value::List(None) => write!(f, "nil"),
        Value::List(Some(items)) => write_seq(f, &items.borrow(), depth),
        Value::Map(None) => write!(f, "nil"),
        Value::Map(Some(map)) => {
            write!(f, "{{")?;
            for (i, (k, v)) in map.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k:?}: ")?;
                write_value(f, v, depth + 1)?;
            }
            write!(f, "}}")
        }
        Value::Record { type_name, fields } => {
            write!(f, "{type_name}{{")?;
            for (i, (name, v)) in fields.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{name}: ")?;
                write_value(f, v, depth + 1)?;
            }
            write!(f, "}}")
        }
        Value::Ref(None) => write!(f, "nil"),
        Value::Ref(Some(target)) => {
            write!(f, "&")?;
            write_value(f, &target.borrow(), depth + 1)
        }
        Value::Any(None) => write!(f, "nil"),
        Value::Any(Some(inner)) => write_value(f, inner, depth + 1),
        Value::Func(None) => write!(f, "func(nil)"),
        Value::Func(Some(id)) => write!(f, "func({id:#x})"),
        Value::Addr(a) => write!(f, "{a:#x}"),
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], depth: usize) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_value(f, v, depth + 1)?;
    }
    write!(f, "]")
}

/// Verbose rendering used in assertion failure messages.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}
