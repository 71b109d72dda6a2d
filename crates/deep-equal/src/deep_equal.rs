//! The recursive, cycle-safe deep equality comparator.

use crate::num::{float_eq, int_to_float, int_uint_eq, is_integer};
use crate::text::{canonical_bytes, is_text_like};
use crate::value::Value;
use std::collections::HashSet;
use std::rc::Rc;

/// Which reference-bearing kind a visited pair belongs to. Pairs of
/// different kinds never collide in the visited set even when allocations
/// share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RefKind {
    List,
    Map,
    Ref,
    Any,
}

/// Unordered pairs of operand identities already under comparison. Scoped
/// to one top-level call.
type VisitedSet = HashSet<(usize, usize, RefKind)>;

/// Deeply compares `a` and `b` with tolerance `eps` for floating-point and
/// complex leaves.
///
/// Values are compared structurally, with cross-kind coercions: integers of
/// any signedness compare by numeric value, integers compare against floats
/// after promotion, and the three text-like representations compare by
/// canonical UTF-8 bytes (see [`float_eq`] for the scalar float rules).
/// A nil value equals an empty or nil list and any nil indirection, wrapper,
/// or callable; a nil map however only equals another nil map.
///
/// Cyclic graphs are safe: once a pair of references is under comparison,
/// re-encountering it short-circuits to equal.
///
/// # Example
///
/// ```
/// use deep_equal::{deep_equal, Value};
///
/// assert!(deep_equal(&Value::from(5i8), &Value::from(5u64), 0.0));
/// assert!(deep_equal(&Value::from(1.0), &Value::from(1.25), 0.25));
/// assert!(!deep_equal(&Value::from(-1i64), &Value::from(u64::MAX), 0.0));
/// ```
pub fn deep_equal(a: &Value, b: &Value, eps: f64) -> bool {
    let mut visited = VisitedSet::new();
    deep_value_equal(a, b, eps, &mut visited)
}

/// [`deep_equal`] with epsilon zero: floats and complex numbers must match
/// exactly, except that NaN/NaN and same-sign infinities still compare equal.
pub fn deep_equal_exact(a: &Value, b: &Value) -> bool {
    deep_equal(a, b, 0.0)
}

/// True when a `Nil` operand is considered equal to `v`: empty or nil
/// lists, and nil indirections, wrappers, and callables, all count as
/// "no value". Nil maps do not.
fn nil_compatible(v: &Value) -> bool {
    match v {
        Value::List(None) => true,
        Value::List(Some(items)) => items.borrow().is_empty(),
        Value::Ref(None) | Value::Any(None) | Value::Func(None) => true,
        _ => false,
    }
}

/// Canonical visited-set key for a pair of same-kind reference-bearing
/// operands. Ordered by address magnitude so (A,B) and (B,A) map to the
/// same entry.
fn visit_key(a: &Value, b: &Value) -> Option<(usize, usize, RefKind)> {
    let (pa, pb, kind) = match (a, b) {
        (Value::List(Some(x)), Value::List(Some(y))) => {
            (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize, RefKind::List)
        }
        (Value::Map(Some(x)), Value::Map(Some(y))) => {
            (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize, RefKind::Map)
        }
        (Value::Ref(Some(x)), Value::Ref(Some(y))) => {
            (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize, RefKind::Ref)
        }
        (Value::Any(Some(x)), Value::Any(Some(y))) => {
            (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize, RefKind::Any)
        }
        _ => return None,
    };
    if pa <= pb {
        Some((pa, pb, kind))
    } else {
        Some((pb, pa, kind))
    }
}

fn deep_value_equal(a: &Value, b: &Value, eps: f64, visited: &mut VisitedSet) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => return true,
        (Value::Nil, other) | (other, Value::Nil) => return nil_compatible(other),
        _ => {}
    }

    // Record the pair before recursing; a recurrence means we are already
    // proving this pair equal further up the stack.
    if let Some(key) = visit_key(a, b) {
        if !visited.insert(key) {
            return true;
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,

        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::UInt(x), Value::UInt(y)) => x == y,
        (Value::Int(x), Value::UInt(y)) | (Value::UInt(y), Value::Int(x)) => int_uint_eq(*x, *y),

        (Value::Float(x), Value::Float(y)) => float_eq(*x, *y, eps),
        (
            Value::Complex { re: r1, im: i1 },
            Value::Complex { re: r2, im: i2 },
        ) => float_eq(*r1, *r2, eps) && float_eq(*i1, *i2, eps),

        // Integer against float: promote the integer and compare with the
        // call's epsilon.
        (x, Value::Float(f)) | (Value::Float(f), x) if is_integer(x) => match int_to_float(x) {
            Some(v) => float_eq(v, *f, eps),
            None => false,
        },

        // Any two text-like values compare by canonical bytes; epsilon
        // does not apply.
        (x, y) if is_text_like(x) && is_text_like(y) => canonical_bytes(x) == canonical_bytes(y),

        (Value::Tuple(x), Value::Tuple(y)) => {
            if x.len() != y.len() {
                return false;
            }
            for (va, vb) in x.iter().zip(y) {
                if !deep_value_equal(va, vb, eps, visited) {
                    return false;
                }
            }
            true
        }

        (Value::List(x), Value::List(y)) => match (x, y) {
            (None, None) => true,
            (None, Some(v)) | (Some(v), None) => v.borrow().is_empty(),
            (Some(x), Some(y)) => {
                if Rc::ptr_eq(x, y) {
                    return true;
                }
                let (x, y) = (x.borrow(), y.borrow());
                if x.len() != y.len() {
                    return false;
                }
                for (va, vb) in x.iter().zip(y.iter()) {
                    if !deep_value_equal(va, vb, eps, visited) {
                        return false;
                    }
                }
                true
            }
        },

        (Value::Map(x), Value::Map(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                if Rc::ptr_eq(x, y) {
                    return true;
                }
                let (x, y) = (x.borrow(), y.borrow());
                if x.len() != y.len() {
                    return false;
                }
                // Sizes match, so checking one direction suffices.
                for (k, va) in x.iter() {
                    match y.get(k) {
                        Some(vb) => {
                            if !deep_value_equal(va, vb, eps, visited) {
                                return false;
                            }
                        }
                        None => return false,
                    }
                }
                true
            }
            // Nil-ness is strict for maps: nil and empty are not the same.
            _ => false,
        },

        (
            Value::Record { type_name: ta, fields: fa },
            Value::Record { type_name: tb, fields: fb },
        ) => {
            if ta != tb || fa.len() != fb.len() {
                return false;
            }
            for ((na, va), (nb, vb)) in fa.iter().zip(fb) {
                if na != nb || !deep_value_equal(va, vb, eps, visited) {
                    return false;
                }
            }
            true
        }

        (Value::Ref(x), Value::Ref(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                // Identical target handles self-cycles and aliasing.
                Rc::ptr_eq(x, y) || deep_value_equal(&x.borrow(), &y.borrow(), eps, visited)
            }
            _ => false,
        },

        (Value::Any(x), Value::Any(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => Rc::ptr_eq(x, y) || deep_value_equal(x, y, eps, visited),
            _ => false,
        },

        // Callables compare by identity token; two distinct non-nil
        // callables are never equal just for being non-nil.
        (Value::Func(x), Value::Func(y)) => x == y,

        (Value::Addr(x), Value::Addr(y)) => x == y,

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn visited_pair_order_is_canonical() {
        let a = Value::reference(Value::from(1));
        let b = Value::reference(Value::from(1));
        let k1 = visit_key(&a, &b).unwrap();
        let k2 = visit_key(&b, &a).unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn ref_kinds_do_not_collide() {
        let l = Value::list([]);
        let r = Value::reference(Value::Nil);
        assert_ne!(
            visit_key(&l, &l.clone()).map(|k| k.2),
            visit_key(&r, &r.clone()).map(|k| k.2)
        );
    }

    #[test]
    fn self_referential_list_terminates() {
        let inner = Rc::new(RefCell::new(Vec::new()));
        let list = Value::List(Some(inner.clone()));
        inner.borrow_mut().push(list.clone());
        assert!(deep_equal(&list, &list.clone(), 0.0));
    }

    #[test]
    fn twin_cyclic_graphs_compare_equal() {
        // Two structurally identical but separately allocated cycles.
        let make = || {
            let inner = Rc::new(RefCell::new(vec![Value::from(1)]));
            let list = Value::List(Some(inner.clone()));
            inner.borrow_mut().push(list.clone());
            list
        };
        assert!(deep_equal(&make(), &make(), 0.0));
    }

    #[test]
    fn mutual_ref_cycle_terminates() {
        let x = Rc::new(RefCell::new(Value::Nil));
        let y = Rc::new(RefCell::new(Value::Nil));
        *x.borrow_mut() = Value::Ref(Some(y.clone()));
        *y.borrow_mut() = Value::Ref(Some(x.clone()));
        let a = Value::Ref(Some(x));
        let b = Value::Ref(Some(y));
        assert!(deep_equal(&a, &b, 0.0));
    }
}
