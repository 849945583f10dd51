//! `Vector` — a typed column of values with an optional validity bitmap.

use crate::bitmap::Bitmap;

/// A column of `T` values. Null rows keep a default placeholder in `values`
/// and a cleared bit in the validity mask; a missing mask means all rows are
/// valid.
///
/// A length-1 vector broadcasts as a scalar against any other length.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    values: Vec<T>,
    validity: Option<Bitmap>,
}

impl<T: Copy> Vector<T> {
    /// A fully-valid vector.
    pub fn from_values(values: Vec<T>) -> Self {
        Vector {
            values,
            validity: None,
        }
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if the vector has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validity of row `i`.
    pub fn is_valid(&self, i: usize) -> bool {
        self.validity.as_ref().map(|v| v.get(i)).unwrap_or(true)
    }

    /// Value at row `i`, `None` when the row is null.
    pub fn get(&self, i: usize) -> Option<T> {
        if self.is_valid(i) {
            Some(self.values[i])
        } else {
            None
        }
    }

    /// Iterate rows as options.
    pub fn iter_opt(&self) -> impl Iterator<Item = Option<T>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// The raw values, null placeholders included.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The validity mask, if any row is null.
    pub fn validity(&self) -> Option<&Bitmap> {
        self.validity.as_ref()
    }

    /// Number of null rows.
    pub fn null_count(&self) -> usize {
        self.validity.as_ref().map(|v| v.null_count()).unwrap_or(0)
    }
}

impl<T: Copy + Default> Vector<T> {
    /// Build from per-row options.
    pub fn from_options(rows: Vec<Option<T>>) -> Self {
        rows.into_iter().collect()
    }

    /// A vector of `len` null rows.
    pub fn full_null(len: usize) -> Self {
        Vector {
            values: vec![T::default(); len],
            validity: Some(Bitmap::new_all_null(len)),
        }
    }
}

impl<T: Copy + Default> FromIterator<Option<T>> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        let mut nulls: Vec<usize> = Vec::new();
        for (i, row) in iter.enumerate() {
            match row {
                Some(v) => values.push(v),
                None => {
                    nulls.push(i);
                    values.push(T::default());
                }
            }
        }
        let validity = if nulls.is_empty() {
            None
        } else {
            let mut bm = Bitmap::new_all_valid(values.len());
            for i in nulls {
                bm.set(i, false);
            }
            Some(bm)
        };
        Vector { values, validity }
    }
}

/// A column of strings, used for per-row offset strings and time-zone names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextColumn {
    values: Vec<Option<String>>,
}

impl TextColumn {
    /// Build from per-row options.
    pub fn from_options(values: Vec<Option<String>>) -> Self {
        TextColumn { values }
    }

    /// A single-row (scalar) column.
    pub fn scalar(value: &str) -> Self {
        TextColumn {
            values: vec![Some(value.to_string())],
        }
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at row `i`, `None` when the row is null.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.values[i].as_deref()
    }
}
