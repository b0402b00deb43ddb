//! Structured matrix errors
//!
//! Every fallible matrix operation returns one of these. They carry enough
//! context (operation name, shapes, offending index) to be reported without
//! re-inspecting the operands.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::{Axis, Shape};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const OVERDETERMINED_VARIABLES: &str = "OVERDETERMINED_VARIABLES";
    pub const JAGGED_INPUT: &str = "JAGGED_INPUT";
}

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum MatrixError {
    #[error("Unable to {operation}: incompatible dimensions {left} and {right}")]
    DimensionMismatch {
        operation: String,
        left: Shape,
        right: Shape,
    },

    #[error("Unable to {operation}: matrix is not square ({shape})")]
    NotSquare {
        operation: String,
        shape: Shape,
    },

    #[error("Unable to {operation}: determinant {determinant} is equal to 0")]
    Singular {
        operation: String,
        determinant: f64,
    },

    #[error("{axis}#{} is absent in matrix with {len} {}", .index + 1, plural(.axis))]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        len: usize,
    },

    #[error("Unable to resolve system with {unknowns} variables and only {equations} equations")]
    OverdeterminedVariables {
        equations: usize,
        unknowns: usize,
    },

    #[error("Jagged input: row {row} has {found} columns, expected {expected}")]
    JaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },
}

fn plural(axis: &Axis) -> &'static str {
    match axis {
        Axis::Row => "rows",
        Axis::Column => "columns",
    }
}

impl MatrixError {
    // ========== Common Error Constructors ==========

    pub fn dimension_mismatch(operation: impl Into<String>, left: Shape, right: Shape) -> Self {
        Self::DimensionMismatch { operation: operation.into(), left, right }
    }

    pub fn not_square(operation: impl Into<String>, shape: Shape) -> Self {
        Self::NotSquare { operation: operation.into(), shape }
    }

    pub fn singular(operation: impl Into<String>, determinant: f64) -> Self {
        Self::Singular { operation: operation.into(), determinant }
    }

    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { axis: Axis::Row, index, len }
    }

    pub fn column_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { axis: Axis::Column, index, len }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            Self::NotSquare { .. } => codes::NOT_SQUARE,
            Self::Singular { .. } => codes::SINGULAR,
            Self::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            Self::OverdeterminedVariables { .. } => codes::OVERDETERMINED_VARIABLES,
            Self::JaggedInput { .. } => codes::JAGGED_INPUT,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "Check operand shapes (rows and columns) before combining",
            Self::NotSquare { .. } => "Use a matrix with equal rows and columns",
            Self::Singular { .. } => "The matrix has no inverse; check for linearly dependent rows",
            Self::IndexOutOfRange { .. } => "Indices start at 0 and must be less than the dimension",
            Self::OverdeterminedVariables { .. } => "Pass an m × (m+1) augmented matrix",
            Self::JaggedInput { .. } => "Make every row the same length",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = MatrixError::dimension_mismatch("add matrices", Shape::new(2, 2), Shape::new(3, 3));
        assert_eq!(err.code(), codes::DIMENSION_MISMATCH);

        let err = MatrixError::singular("invert matrix", 0.0);
        assert_eq!(err.code(), codes::SINGULAR);

        let err = MatrixError::OverdeterminedVariables { equations: 2, unknowns: 4 };
        assert_eq!(err.code(), codes::OVERDETERMINED_VARIABLES);
    }

    #[test]
    fn test_messages() {
        let err = MatrixError::dimension_mismatch("multiply matrices", Shape::new(2, 4), Shape::new(2, 2));
        assert_eq!(err.to_string(), "Unable to multiply matrices: incompatible dimensions 2×4 and 2×2");

        let err = MatrixError::column_out_of_range(0, 0);
        assert_eq!(err.to_string(), "Column#1 is absent in matrix with 0 columns");
    }

    #[test]
    fn test_suggestion_present() {
        let err = MatrixError::not_square("raise to a power", Shape::new(1, 2));
        assert!(!err.suggestion().is_empty());
    }
}
