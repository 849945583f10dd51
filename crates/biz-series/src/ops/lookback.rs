//! Previous-greater lookback indices.

use crate::vector::Vector;

/// For each row, the index of the most recent preceding row whose value is
/// strictly greater.
///
/// Rows with no preceding value at all (or that are themselves null) yield
/// null; a row that dominates its entire prefix yields its own index. The
/// scan keeps a chain of parent pointers, so each element is visited a
/// bounded number of times regardless of input shape.
pub fn arg_previous_greater<T>(input: &Vector<T>) -> Vector<u32>
where
    T: Copy + PartialOrd,
{
    let len = input.len();
    // idx[i] = index of the previous strictly-greater element, if any.
    let mut idx: Vec<Option<u32>> = Vec::with_capacity(len);
    let mut out: Vec<Option<u32>> = Vec::with_capacity(len);

    for i in 0..len {
        let Some(value) = input.get(i) else {
            idx.push(None);
            out.push(None);
            continue;
        };
        // Most recent preceding non-null row.
        let mut j = (i as i64) - 1;
        while j >= 0 && input.get(j as usize).is_none() {
            j -= 1;
        }
        if j < 0 {
            idx.push(None);
            out.push(None);
            continue;
        }
        let mut cursor = Some(j as u32);
        while let Some(k) = cursor {
            match input.get(k as usize) {
                Some(prev) if prev > value => break,
                _ => cursor = idx[k as usize],
            }
        }
        match cursor {
            Some(k) => {
                idx.push(Some(k));
                out.push(Some(k));
            }
            None => {
                // Nothing before this row is greater; it is its own running
                // maximum.
                idx.push(None);
                out.push(Some(i as u32));
            }
        }
    }

    Vector::from_options(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_descents_point_backwards() {
        let v = Vector::from_values(vec![5i64, 3, 4, 1, 2]);
        let out = arg_previous_greater(&v);
        // 5 has no predecessor; 3 and 4 look back to index 0; 1 to index 2.
        assert_eq!(out.get(0), None);
        assert_eq!(out.get(1), Some(0));
        assert_eq!(out.get(2), Some(0));
        assert_eq!(out.get(3), Some(2));
        assert_eq!(out.get(4), Some(2));
    }

    #[test]
    fn running_maximum_points_at_itself() {
        let v = Vector::from_values(vec![1i32, 2, 3]);
        let out = arg_previous_greater(&v);
        assert_eq!(out.get(0), None);
        assert_eq!(out.get(1), Some(1));
        assert_eq!(out.get(2), Some(2));
    }

    #[test]
    fn equal_values_keep_searching() {
        // Strictly greater: an equal predecessor does not count.
        let v = Vector::from_values(vec![4i32, 2, 2]);
        let out = arg_previous_greater(&v);
        assert_eq!(out.get(1), Some(0));
        assert_eq!(out.get(2), Some(0));
    }

    #[test]
    fn nulls_are_skipped_over() {
        let v = Vector::from_options(vec![Some(5.0f64), None, Some(3.0)]);
        let out = arg_previous_greater(&v);
        assert_eq!(out.get(0), None);
        assert_eq!(out.get(1), None);
        assert_eq!(out.get(2), Some(0));
    }
}
