//! Determinant, minors, cofactors, adjugate and inverse
//!
//! The determinant is computed by cofactor expansion along the first row.
//! That is O(n!) in the matrix size and meant for small matrices; each
//! recursive step works on an independently owned sub-matrix produced by
//! [`Matrix::delete_row_column`].

use cofactor_core::MatrixError;
use crate::types::{Matrix, ACCURACY};

/// `(-1)^k`
fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

impl Matrix {
    /// Determinant of a square matrix
    pub fn det(&self) -> Result<f64, MatrixError> {
        self.check_square("calculate determinant")?;

        match self.rows {
            1 => Ok(self.at(0, 0)),
            2 => Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)),
            n => {
                let mut result = 0.0;
                for j in 0..n {
                    let sub = self.delete_row_column(0, j)?;
                    result += self.at(0, j) * sign(j) * sub.det()?;
                }
                Ok(result)
            }
        }
    }

    /// Determinant of the matrix without row `row` and column `col`
    ///
    /// For a 1×1 matrix the remaining block is empty and its determinant
    /// is 1. Deleting the row and column outright would clamp to a 1×1 zero
    /// matrix and give 0, which makes `inverse([[a]])` a zero matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        if self.rows == 1 && self.cols == 1 {
            return Ok(1.0);
        }
        self.delete_row_column(row, col)?.det()
    }

    /// Cofactor (algebraic addition): `(-1)^(row+col) * minor(row, col)`
    pub fn alg_add(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        Ok(self.minor(row, col)? * sign(row + col))
    }

    /// Adjugate: transpose of the cofactor matrix
    pub fn adj(&self) -> Result<Matrix, MatrixError> {
        self.check_square("calculate adjoint matrix")?;

        let mut c = self.blank(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *c.at_mut(j, i) = self.alg_add(i, j)?;
            }
        }
        Ok(c)
    }

    /// Inverse via `adj / det`; fails if `|det| < ACCURACY`
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.det()?;
        if det.abs() < ACCURACY {
            return Err(self.reject(MatrixError::singular("invert matrix", det)));
        }
        Ok(Matrix::number_mul_matrix(1.0 / det, &self.adj()?))
    }

    /// `transpose(transpose(self)) == self`
    pub fn is_transpose_correct(&self) -> bool {
        self.transpose().transpose() == *self
    }

    /// `self * inverse(self) == I` and `inverse(self) * self == I`
    pub fn is_inverse_correct(&self) -> Result<bool, MatrixError> {
        let inv = self.inverse()?;
        let identity = self.identity();
        Ok(self.mul(&inv)? == identity && inv.mul(self)? == identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use cofactor_core::{CapturingDiagnostics, Level, codes};

    fn plain() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [-2.0, -4.0, -5.0], [3.0, 5.0, 6.0]])
    }

    #[test]
    fn test_det_small() {
        assert_eq!(Matrix::from_rows(&[[7.5]]).det().unwrap(), 7.5);

        let (a, b, c, d) = (1.25, -3.0, 0.5, 2.0);
        assert_eq!(Matrix::from_rows(&[[a, b], [c, d]]).det().unwrap(), a * d - b * c);
    }

    #[test]
    fn test_det_scenario() {
        // 1·(-24 + 25) - 2·(-12 + 15) + 3·(-10 + 12) = 1
        let det = plain().det().unwrap();
        assert!((det - 1.0).abs() < 1e-10);

        let ab = Matrix::from_rows(&[[11.0, 0.0], [7.0, 14.0]]);
        assert_eq!(ab.det().unwrap(), 154.0);
    }

    #[test]
    fn test_det_matches_nalgebra() {
        let m = Matrix::from_rows(&[
            [2.0, 1.0, -5.0, 1.0, 0.5],
            [1.0, -3.0, 0.0, -6.0, 2.0],
            [0.0, 2.0, -1.0, 2.0, -1.0],
            [1.0, 4.0, -7.0, 6.0, 3.0],
            [-2.0, 0.0, 1.0, 1.0, 1.0],
        ]);
        let expected = m.to_dmatrix().determinant();
        assert!((m.det().unwrap() - expected).abs() < 1e-8);
    }

    #[test]
    fn test_det_not_square() {
        let log = Arc::new(CapturingDiagnostics::new());
        let m = Matrix::new_logged(2, 3, log.clone());

        assert_eq!(m.det().unwrap_err().code(), codes::NOT_SQUARE);
        assert_eq!(m.adj().unwrap_err().code(), codes::NOT_SQUARE);
        assert_eq!(m.inverse().unwrap_err().code(), codes::NOT_SQUARE);
        assert_eq!(log.count(Level::Error), 3);
    }

    #[test]
    fn test_minor_and_cofactor() {
        let m = plain();
        // Delete row 0, col 1 → [[-2, -5], [3, 6]] → -12 + 15 = 3
        assert!((m.minor(0, 1).unwrap() - 3.0).abs() < 1e-10);
        assert!((m.alg_add(0, 1).unwrap() - (-3.0)).abs() < 1e-10);
        assert!((m.alg_add(1, 1).unwrap() - m.minor(1, 1).unwrap()).abs() < 1e-10);

        assert_eq!(m.minor(3, 0).unwrap_err().code(), codes::INDEX_OUT_OF_RANGE);
        assert_eq!(m.alg_add(0, 3).unwrap_err().code(), codes::INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_adj() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.adj().unwrap(), Matrix::from_rows(&[[4.0, -2.0], [-3.0, 1.0]]));

        // A · adj(A) = det(A) · I
        let p = plain();
        let product = p.mul(&p.adj().unwrap()).unwrap();
        assert_eq!(product, p.identity().mul_by_number(p.det().unwrap()));
    }

    #[test]
    fn test_inverse_scenario() {
        let m = plain();
        let inv = m.inverse().unwrap();

        assert_eq!(inv.mul(&m).unwrap(), m.identity());
        assert!(m.is_inverse_correct().unwrap());
        assert!(m.is_transpose_correct());
    }

    #[test]
    fn test_transpose_correct_rectangular() {
        assert!(Matrix::from_rows(&[[1.0, -2.0, 3.5]]).is_transpose_correct());
        assert!(Matrix::from_rows(&[[1.0], [2.0], [3.0]]).is_transpose_correct());
        assert!(Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).is_transpose_correct());
    }

    #[test]
    fn test_inverse_one_by_one() {
        let m = Matrix::from_rows(&[[4.0]]);
        assert_eq!(m.inverse().unwrap(), Matrix::from_rows(&[[0.25]]));
        assert!(m.is_inverse_correct().unwrap());
    }

    #[test]
    fn test_inverse_singular() {
        let log = Arc::new(CapturingDiagnostics::new());
        let m = Matrix::from_rows_logged(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]], log.clone());

        let err = m.inverse().unwrap_err();
        assert_eq!(err.code(), codes::SINGULAR);
        assert!(m.is_inverse_correct().is_err());
        assert_eq!(log.count(Level::Error), 2);
    }

    #[test]
    fn test_inverse_property_over_samples() {
        let samples = [
            Matrix::from_rows(&[[2.0, 1.0], [7.0, 4.0]]),
            Matrix::from_rows(&[[3.0, -1.0, 0.0], [-2.0, 1.0, 1.0], [2.0, -1.0, 4.0]]),
            Matrix::from_rows(&[
                [2.0, 1.0, -5.0, 1.0],
                [1.0, -3.0, 0.0, -6.0],
                [0.0, 2.0, -1.0, 2.0],
                [1.0, 4.0, -7.0, 6.0],
            ]),
        ];
        for m in &samples {
            assert!(m.det().unwrap().abs() >= ACCURACY);
            assert!(m.is_inverse_correct().unwrap(), "inverse check failed for {}", m);
            assert!(m.is_transpose_correct());
        }
    }
}
