//! Core matrix type

use std::fmt;
use std::ops::Index;
use cofactor_core::{MatrixError, Shape, SharedDiagnostics, default_diagnostics};
use nalgebra::DMatrix;
use serde::{Serialize, Deserialize};
use crate::helpers::within_accuracy;

/// Tolerance for equality, singularity and near-zero divisor checks
pub const ACCURACY: f64 = 1e-8;

/// Dense, row-major matrix of `f64`
///
/// Dimensions are fixed at construction and are never zero. Every operation
/// except [`Matrix::set_contents`] returns a freshly allocated matrix; the
/// diagnostics sink is shared with the results.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
    pub(crate) diagnostics: SharedDiagnostics,
}

impl Matrix {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Row-major backing buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy out as nested rows
    pub fn to_nested_list(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// The sink this matrix reports to
    pub fn diagnostics(&self) -> &SharedDiagnostics {
        &self.diagnostics
    }

    /// Builder: replace the diagnostics sink
    pub fn with_diagnostics(mut self, diagnostics: SharedDiagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }

    /// Tolerant equality: same shape, every cell within [`ACCURACY`]
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data.iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| within_accuracy(a, b))
    }

    /// Convert to nalgebra DMatrix
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.rows, self.cols, &self.data)
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(m: &DMatrix<f64>) -> Self {
        let mut result = Matrix::new(m.nrows(), m.ncols());
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                *result.at_mut(i, j) = m[(i, j)];
            }
        }
        result
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}×{} matrix", row, col, self.rows, self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.data.chunks(self.cols) {
            for val in row {
                write!(f, "{:?} ", val)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.to_nested_list())
            .finish()
    }
}

/// Serialized form: `{ "rows": r, "cols": c, "data": [[..], ..] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl From<Matrix> for MatrixRepr {
    fn from(m: Matrix) -> Self {
        MatrixRepr { rows: m.rows, cols: m.cols, data: m.to_nested_list() }
    }
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        let found_cols = repr.data.first().map_or(0, |row| row.len());
        if repr.rows == 0 || repr.cols == 0 || repr.data.len() != repr.rows || found_cols != repr.cols {
            return Err(MatrixError::dimension_mismatch(
                "deserialize matrix",
                Shape::new(repr.rows, repr.cols),
                Shape::new(repr.data.len(), found_cols),
            ));
        }
        for (i, row) in repr.data.iter().enumerate() {
            if row.len() != repr.cols {
                return Err(MatrixError::JaggedInput { row: i, expected: repr.cols, found: row.len() });
            }
        }

        Ok(Matrix {
            rows: repr.rows,
            cols: repr.cols,
            data: repr.data.into_iter().flatten().collect(),
            diagnostics: default_diagnostics(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use cofactor_core::NoopDiagnostics;

    #[test]
    fn test_matrix_accessors() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert!(!m.is_square());
        assert_eq!(m.get(1, 2), Some(6.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_tolerant_equality() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows(&[[1.0 + 1e-9, 2.0], [3.0, 4.0 - 1e-9]]);
        let c = Matrix::from_rows(&[[1.0 + 1e-7, 2.0], [3.0, 4.0]]);
        let d = Matrix::from_rows(&[[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display_format() {
        let m = Matrix::from_rows(&[[1.0, -2.5], [0.1, 4.0]]);
        assert_eq!(m.to_string(), "[\n1.0 -2.5 \n0.1 4.0 \n]");

        // Cell text parses back to the same values
        let parsed: Vec<f64> = m.to_string()
            .lines()
            .filter(|l| *l != "[" && *l != "]")
            .flat_map(|l| l.split_whitespace().map(|s| s.parse::<f64>().unwrap()).collect::<Vec<_>>())
            .collect();
        assert_eq!(parsed, m.as_slice());
    }

    #[test]
    fn test_debug_omits_sink() {
        let m = Matrix::new(1, 2).with_diagnostics(Arc::new(NoopDiagnostics));
        assert_eq!(format!("{:?}", m), "Matrix { rows: 1, cols: 2, data: [[0.0, 0.0]] }");
    }

    #[test]
    fn test_dmatrix_interop() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let dm = m.to_dmatrix();
        assert_eq!(dm.nrows(), 2);
        assert_eq!(dm.ncols(), 3);
        assert_eq!(dm[(1, 0)], 4.0);

        let back = Matrix::from_dmatrix(&dm);
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_roundtrip() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":2,"data":[[1.0,2.0],[3.0,4.0]]}"#);

        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_bad_shapes() {
        let jagged = r#"{"rows":2,"cols":2,"data":[[1.0,2.0],[3.0]]}"#;
        assert!(serde_json::from_str::<Matrix>(jagged).is_err());

        let short = r#"{"rows":3,"cols":2,"data":[[1.0,2.0],[3.0,4.0]]}"#;
        assert!(serde_json::from_str::<Matrix>(short).is_err());

        let empty = r#"{"rows":0,"cols":0,"data":[]}"#;
        assert!(serde_json::from_str::<Matrix>(empty).is_err());
    }
}
