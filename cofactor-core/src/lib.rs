//! Cofactor Core - Fundamental types
//!
//! This crate provides the vocabulary shared by the matrix library and its
//! consumers:
//! - `MatrixError`: Structured, machine-readable failures
//! - `Shape` / `Axis`: Dimension descriptions used in error reports
//! - `Diagnostics`: The leveled logging port the matrix core writes to

mod error;
mod shape;
pub mod diagnostics;

pub use error::{MatrixError, codes};
pub use shape::{Shape, Axis};
pub use diagnostics::{
    Diagnostics, SharedDiagnostics, Level, Record,
    TracingDiagnostics, NoopDiagnostics, CapturingDiagnostics,
    default_diagnostics,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{MatrixError, Shape, Axis, Diagnostics, SharedDiagnostics, Level};
    pub use crate::error::codes;
}
