//! Linear system solver

use cofactor_core::{MatrixError, SharedDiagnostics, default_diagnostics};
use crate::types::Matrix;

impl Matrix {
    /// Solve a system of linear algebraic equations given as an `m × (m+1)`
    /// augmented matrix; returns the `m × 1` column of unknowns
    ///
    /// The last column is the right-hand side. The solution is
    /// `inverse(A) * b`, so a singular coefficient matrix fails with
    /// `Singular`.
    pub fn resolve_slae(augmented: &Matrix) -> Result<Matrix, MatrixError> {
        let m = augmented.rows;
        if augmented.cols > m + 1 {
            return Err(augmented.reject(MatrixError::OverdeterminedVariables {
                equations: m,
                unknowns: augmented.cols - 1,
            }));
        }

        // Fails with IndexOutOfRange when there is no right-hand-side column
        let coefficients = augmented.delete_column(m)?;

        let mut b = augmented.blank(m, 1);
        for i in 0..m {
            *b.at_mut(i, 0) = augmented.at(i, m);
        }

        coefficients.inverse()?.mul(&b)
    }

    /// [`Matrix::resolve_slae`] on a raw row buffer
    pub fn resolve_slae_rows<R: AsRef<[f64]>>(source: &[R]) -> Result<Matrix, MatrixError> {
        Self::resolve_slae_rows_logged(source, default_diagnostics())
    }

    pub fn resolve_slae_rows_logged<R: AsRef<[f64]>>(
        source: &[R],
        diagnostics: SharedDiagnostics,
    ) -> Result<Matrix, MatrixError> {
        Self::resolve_slae(&Matrix::from_rows_logged(source, diagnostics))
    }
}
