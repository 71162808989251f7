use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is treated as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares floating point numbers passed by reference.
#[inline]
pub fn compare_floats_refs(a: &Float, b: &Float) -> Ordering {
    compare_floats(*a, *b)
}
