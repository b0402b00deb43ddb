//! Helper functions for matrix operations

use cofactor_core::MatrixError;
use crate::types::{Matrix, ACCURACY};

/// Two cells are equal if they differ by less than [`ACCURACY`]
pub fn within_accuracy(a: f64, b: f64) -> bool {
    (a - b).abs() < ACCURACY
}

/// Replace a near-zero divisor with [`ACCURACY`], reporting the substitution
pub(crate) fn guard_divisor(m: &Matrix, divisor: f64) -> f64 {
    if divisor.abs() < ACCURACY {
        m.diagnostics.warn(&format!(
            "Possible divide by 0. Matrix will be divided by {} to avoid abnormal termination.",
            ACCURACY
        ));
        ACCURACY
    } else {
        divisor
    }
}

/// Index of the first row whose length differs from the first row's
pub(crate) fn find_jagged_row<R: AsRef<[f64]>>(source: &[R]) -> Option<(usize, usize, usize)> {
    let expected = source.first().map_or(0, |row| row.as_ref().len());
    source.iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.as_ref().len() != expected)
        .map(|(i, row)| (i, expected, row.as_ref().len()))
}

impl Matrix {
    /// Report a failure through the diagnostics sink and hand it back
    pub(crate) fn reject(&self, err: MatrixError) -> MatrixError {
        self.diagnostics.error(&err.to_string());
        err
    }

    /// Check that two matrices have the same dimensions
    pub(crate) fn check_same_dims(&self, other: &Matrix, operation: &str) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.reject(MatrixError::dimension_mismatch(operation, self.shape(), other.shape())));
        }
        Ok(())
    }

    /// Check that two matrices have compatible dimensions for multiplication
    pub(crate) fn check_matmul_dims(&self, other: &Matrix, operation: &str) -> Result<(), MatrixError> {
        if self.cols != other.rows {
            return Err(self.reject(MatrixError::dimension_mismatch(operation, self.shape(), other.shape())));
        }
        Ok(())
    }

    /// Check that a matrix is square
    pub(crate) fn check_square(&self, operation: &str) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(self.reject(MatrixError::not_square(operation, self.shape())));
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.rows {
            return Err(self.reject(MatrixError::row_out_of_range(row, self.rows)));
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<(), MatrixError> {
        if col >= self.cols {
            return Err(self.reject(MatrixError::column_out_of_range(col, self.cols)));
        }
        Ok(())
    }

    /// Zero matrix of the given size sharing this matrix's sink
    pub(crate) fn blank(&self, rows: usize, cols: usize) -> Matrix {
        Matrix::new_logged(rows, cols, self.diagnostics.clone())
    }
}
