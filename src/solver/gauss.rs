//! Gaussian elimination on augmented `N x (N+1)` systems.

use num_traits::Float;
use tracing::trace;

use super::matrix::Matrix;
use super::tolerance::{RelativeTolerance, Tolerance};
use crate::error::{CircuitError, Result};

/// A system of linear equations stored as an augmented matrix `[A | b]`.
///
/// The comparator `C` decides when a pivot is effectively zero.
#[derive(Debug, Clone)]
pub struct LinearSystem<T, C = RelativeTolerance> {
    matrix: Matrix<T>,
    cmp: C,
}

impl<T: Float, C: Tolerance<T>> LinearSystem<T, C> {
    /// Wrap an augmented matrix. Fails unless `width == height + 1`.
    pub fn new(matrix: Matrix<T>, cmp: C) -> Result<Self> {
        if matrix.width() != matrix.height() + 1 {
            return Err(CircuitError::NotAugmented {
                rows: matrix.height(),
                cols: matrix.width(),
            });
        }
        Ok(Self { matrix, cmp })
    }

    /// Build a system from explicit rows `[a_0 .. a_{n-1}, b]`.
    pub fn from_rows(rows: Vec<Vec<T>>, cmp: C) -> Result<Self> {
        Self::new(Matrix::from_rows(rows)?, cmp)
    }

    /// An all-zero system with `size` unknowns.
    pub fn zeros(size: usize, cmp: C) -> Self {
        Self {
            matrix: Matrix::filled(size, size + 1, T::zero()),
            cmp,
        }
    }

    /// Number of unknowns (and equations).
    pub fn size(&self) -> usize {
        self.matrix.height()
    }

    /// The augmented matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Borrow equation `i` including its right-hand side.
    pub fn row(&self, i: usize) -> &[T] {
        self.matrix.row(i)
    }

    /// Mutably borrow equation `i` including its right-hand side.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        self.matrix.row_mut(i)
    }

    /// Set the coefficient of unknown `col` in equation `row`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.matrix[(row, col)] = value;
    }

    /// Set the right-hand side of equation `row`.
    pub fn set_rhs(&mut self, row: usize, value: T) {
        let n = self.size();
        self.matrix[(row, n)] = value;
    }

    /// Forward elimination with partial pivoting.
    ///
    /// Returns the signed product of pivots (the determinant of `A`), or
    /// `None` as soon as a pivot is negligible. On `None` the matrix is left
    /// partially reduced and must not be used further.
    ///
    /// Every cell carries a bound on the magnitude of the terms that were
    /// summed into it. A pivot is rejected only when cancellation left it
    /// negligible next to that bound, so a system scaled by any power of ten
    /// is judged the same way.
    pub fn reduce_to_upper_triangular(&mut self) -> Option<T> {
        let n = self.size();
        let mut det = T::one();
        let mut bounds = self.matrix.map(|v| v.abs());

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_abs = self.matrix[(k, k)].abs();
            for i in (k + 1)..n {
                let val = self.matrix[(i, k)].abs();
                if val > pivot_abs {
                    pivot_abs = val;
                    pivot_row = i;
                }
            }

            if self.cmp.is_negligible(pivot_abs, bounds[(pivot_row, k)]) {
                trace!(column = k, size = n, "zero pivot");
                return None;
            }

            if pivot_row != k {
                self.matrix.swap_rows(k, pivot_row);
                bounds.swap_rows(k, pivot_row);
                det = -det;
            }

            let pivot = self.matrix[(k, k)];
            det = det * pivot;

            for i in (k + 1)..n {
                let (target, source) = self.matrix.row_pair_mut(i, k);
                let factor = target[k] / pivot;
                if factor == T::zero() {
                    continue;
                }
                target[k] = T::zero();
                for j in (k + 1)..=n {
                    target[j] = target[j] - factor * source[j];
                }

                let (target_bound, source_bound) = bounds.row_pair_mut(i, k);
                target_bound[k] = T::zero();
                for j in (k + 1)..=n {
                    target_bound[j] = target_bound[j].max(factor.abs() * source_bound[j]);
                }
            }
        }

        Some(det)
    }

    /// Reduce an upper triangular system to `[I | x]` and return `x`.
    ///
    /// Must only be called after a successful
    /// [`reduce_to_upper_triangular`](Self::reduce_to_upper_triangular).
    pub fn back_substitute(&mut self) -> Vec<T> {
        let n = self.size();

        for k in (0..n).rev() {
            let pivot = self.matrix[(k, k)];
            {
                let row = self.matrix.row_mut(k);
                for value in &mut row[k..=n] {
                    *value = *value / pivot;
                }
            }

            for i in 0..k {
                let (target, source) = self.matrix.row_pair_mut(i, k);
                let factor = target[k];
                if factor == T::zero() {
                    continue;
                }
                // Row k is zero between k+1 and n-1 by now
                target[k] = T::zero();
                target[n] = target[n] - factor * source[n];
            }
        }

        self.matrix.rows().map(|row| row[n]).collect()
    }

    /// Solve the system without modifying it.
    ///
    /// Returns [`CircuitError::SingularMatrix`] when the system has no unique
    /// solution within tolerance; no approximate result is ever returned.
    pub fn solve(&self) -> Result<Vec<T>>
    where
        C: Clone,
    {
        let mut work = self.clone();

        let det = work
            .reduce_to_upper_triangular()
            .ok_or(CircuitError::SingularMatrix)?;
        trace!(size = work.size(), det = ?det.to_f64(), "reduced to upper triangular");

        let solution = work.back_substitute();
        if solution.iter().any(|x| !x.is_finite()) {
            return Err(CircuitError::SingularMatrix);
        }
        Ok(solution)
    }
}
