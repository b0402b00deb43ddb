//! Matrix operations: arithmetic, transformations, structural editing

use cofactor_core::MatrixError;
use crate::types::Matrix;
use crate::helpers::guard_divisor;

impl Matrix {
    // ============ add / sub ============

    /// Elementwise sum; shapes must match
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_dims(right, "add matrices")?;
        Ok(self.zip_with(right, |a, b| a + b))
    }

    /// Elementwise difference; shapes must match
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_dims(right, "subtract matrices")?;
        Ok(self.zip_with(right, |a, b| a - b))
    }

    // ============ scalar ============

    /// Multiply every cell by `number`
    pub fn mul_by_number(&self, number: f64) -> Matrix {
        self.map(|x| x * number)
    }

    /// `number * right`, cell by cell
    pub fn number_mul_matrix(number: f64, right: &Matrix) -> Matrix {
        right.map(|x| number * x)
    }

    /// Divide every cell by `number`
    ///
    /// A divisor closer to zero than [`crate::ACCURACY`] is replaced by
    /// `ACCURACY` itself (positive, whatever the sign of `number`).
    pub fn div_by_number(&self, number: f64) -> Matrix {
        let divisor = guard_divisor(self, number);
        self.map(|x| x / divisor)
    }

    /// Elementwise absolute value
    pub fn abs(&self) -> Matrix {
        self.map(f64::abs)
    }

    // ============ matmul / div ============

    /// Matrix product; `self.cols` must equal `right.rows`
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_matmul_dims(right, "multiply matrices")?;

        let mut c = self.blank(self.rows, right.cols);
        for i in 0..self.rows {
            for j in 0..right.cols {
                let mut sum = 0.0;
                for k in 0..right.rows {
                    sum += self.at(i, k) * right.at(k, j);
                }
                *c.at_mut(i, j) = sum;
            }
        }
        Ok(c)
    }

    /// Reciprocal-weighted product: `c[i][j] = Σ_k self[i][k] / right[k][j]`
    ///
    /// This is not `self * inverse(right)`. Near-zero cells of `right` are
    /// replaced by `ACCURACY`, with one warning per substitution.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_matmul_dims(right, "divide matrices")?;

        let mut c = self.blank(self.rows, right.cols);
        for i in 0..self.rows {
            for j in 0..right.cols {
                let mut sum = 0.0;
                for k in 0..right.rows {
                    sum += self.at(i, k) / guard_divisor(self, right.at(k, j));
                }
                *c.at_mut(i, j) = sum;
            }
        }
        Ok(c)
    }

    // ============ transpose / pow ============

    pub fn transpose(&self) -> Matrix {
        let mut c = self.blank(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *c.at_mut(j, i) = self.at(i, j);
            }
        }
        c
    }

    /// Raise a square matrix to an integer power
    ///
    /// Negative powers use the inverse and fail on singular input.
    /// `pow(0)` is the identity even for singular matrices.
    pub fn pow(&self, n: i32) -> Result<Matrix, MatrixError> {
        self.check_square("raise to a power")?;

        let base = if n < 0 {
            let det = self.det()?;
            if det.abs() < crate::ACCURACY {
                return Err(self.reject(MatrixError::singular("raise to a negative power", det)));
            }
            self.inverse()?
        } else {
            self.clone()
        };

        let mut c = self.identity();
        for _ in 0..n.unsigned_abs() {
            c = c.mul(&base)?;
        }
        Ok(c)
    }

    // ============ structural editing ============

    /// Copy without row `row` (0-based)
    pub fn delete_row(&self, row: usize) -> Result<Matrix, MatrixError> {
        self.check_row(row)?;

        let mut c = self.blank(self.rows - 1, self.cols);
        let kept = self.data.chunks(self.cols)
            .enumerate()
            .filter(|(i, _)| *i != row)
            .flat_map(|(_, r)| r.iter().copied());
        for (dst, src) in c.data.iter_mut().zip(kept) {
            *dst = src;
        }
        Ok(c)
    }

    /// Copy without column `col` (0-based)
    pub fn delete_column(&self, col: usize) -> Result<Matrix, MatrixError> {
        self.check_col(col)?;

        let mut c = self.blank(self.rows, self.cols - 1);
        let kept = self.data.chunks(self.cols)
            .flat_map(|r| r.iter()
                .enumerate()
                .filter(move |(j, _)| *j != col)
                .map(|(_, &x)| x));
        for (dst, src) in c.data.iter_mut().zip(kept) {
            *dst = src;
        }
        Ok(c)
    }

    /// Copy without row `row` and column `col`; both indices are validated
    /// against this matrix before anything is built
    pub fn delete_row_column(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.delete_row(row)?.delete_column(col)
    }

    // ============ internals ============

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
            diagnostics: self.diagnostics.clone(),
        }
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter()).map(|(&a, &b)| f(a, b)).collect(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}
