//! Element-wise evaluation with scalar broadcasting.
//!
//! A length-1 operand is treated as a scalar and repeated against the other
//! operand's length. Null rows short-circuit: the row function is never
//! called, the output row is null. A row-level error aborts the whole batch.

use crate::vector::Vector;
use biz_core::errors::{Error, Result};

/// Broadcast two lengths, treating 1 as scalar.
pub fn broadcast_len(left: usize, right: usize) -> Result<usize> {
    if left == right {
        Ok(left)
    } else if left == 1 {
        Ok(right)
    } else if right == 1 {
        Ok(left)
    } else {
        Err(Error::LengthMismatch { left, right })
    }
}

/// Fallible element-wise combination of two vectors.
pub fn try_binary_elementwise<T, U, V, F>(
    lhs: &Vector<T>,
    rhs: &Vector<U>,
    mut f: F,
) -> Result<Vector<V>>
where
    T: Copy,
    U: Copy,
    V: Copy + Default,
    F: FnMut(T, U) -> Result<V>,
{
    let len = broadcast_len(lhs.len(), rhs.len())?;
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let l = if lhs.len() == 1 { lhs.get(0) } else { lhs.get(i) };
        let r = if rhs.len() == 1 { rhs.get(0) } else { rhs.get(i) };
        match (l, r) {
            (Some(l), Some(r)) => out.push(Some(f(l, r)?)),
            _ => out.push(None),
        }
    }
    Ok(Vector::from_options(out))
}

/// Infallible element-wise combination of two vectors.
pub fn binary_elementwise<T, U, V, F>(lhs: &Vector<T>, rhs: &Vector<U>, mut f: F) -> Result<Vector<V>>
where
    T: Copy,
    U: Copy,
    V: Copy + Default,
    F: FnMut(T, U) -> V,
{
    try_binary_elementwise(lhs, rhs, |l, r| Ok(f(l, r)))
}

/// Fallible element-wise map over one vector.
pub fn try_unary_elementwise<T, V, F>(input: &Vector<T>, mut f: F) -> Result<Vector<V>>
where
    T: Copy,
    V: Copy + Default,
    F: FnMut(T) -> Result<V>,
{
    let mut out = Vec::with_capacity(input.len());
    for row in input.iter_opt() {
        match row {
            Some(v) => out.push(Some(f(v)?)),
            None => out.push(None),
        }
    }
    Ok(Vector::from_options(out))
}
