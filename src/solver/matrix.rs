//! Dense row-major matrix container.

use std::ops::{Index, IndexMut};

use crate::error::{CircuitError, Result};

/// Dense `height x width` matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a matrix filled with `T::default()`.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            data: vec![value; height * width],
            height,
            width,
        }
    }

    /// Build a matrix from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(height * width);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(CircuitError::RaggedRows {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            height,
            width,
        })
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    /// Mutably borrow row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.width..(i + 1) * self.width]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on 0; a zero-width matrix has no cells anyway
        self.data.chunks_exact(self.width.max(1))
    }

    /// Apply `f` to every cell.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            height: self.height,
            width: self.width,
        }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * self.width);
        head[lo * self.width..(lo + 1) * self.width].swap_with_slice(&mut tail[..self.width]);
    }

    /// Borrow row `target` mutably together with row `source` immutably.
    pub(crate) fn row_pair_mut(&mut self, target: usize, source: usize) -> (&mut [T], &[T]) {
        assert_ne!(target, source, "row_pair_mut needs distinct rows");
        let w = self.width;
        if target < source {
            let (head, tail) = self.data.split_at_mut(source * w);
            (&mut head[target * w..(target + 1) * w], &tail[..w])
        } else {
            let (head, tail) = self.data.split_at_mut(target * w);
            (&mut tail[..w], &head[source * w..(source + 1) * w])
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.width + col]
    }
}
