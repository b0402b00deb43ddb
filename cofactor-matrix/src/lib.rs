//! Cofactor Matrix - Dense matrix arithmetic and classical linear algebra
//!
//! Provides a fixed-shape, row-major `f64` matrix and its operations:
//! - Construction (zero-filled, from a sized source, inferred from rows, set contents, identity)
//! - Elementwise and scalar operations (add, sub, scale, divide by number, abs)
//! - Products (matrix multiplication, reciprocal-weighted division, integer power)
//! - Transpose and norms (m, l, k)
//! - Structural editing (delete row, column, or both)
//! - Determinant chain (det, minor, cofactor, adjugate, inverse) by cofactor expansion
//! - Linear systems via the inverse of the coefficient matrix
//!
//! Recoverable conditions never fail; they are reported through the
//! matrix's diagnostics sink and a defined fallback is used. Structural
//! errors come back as [`MatrixError`].

mod types;
mod helpers;
mod construct;
mod ops;
mod props;
mod norms;
mod solve;

pub use types::{Matrix, ACCURACY};
pub use helpers::within_accuracy;
pub use cofactor_core::{MatrixError, Shape, Axis, codes};
