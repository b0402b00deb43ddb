//! Matrix construction: zero-filled, sized-from-source, inferred-from-source,
//! plus bulk replacement and identity.
//!
//! Construction never fails. Degenerate requests are normalized (zero
//! dimensions become 1, short sources shrink or zero-pad the result) and
//! each normalization is reported through the diagnostics sink.

use cofactor_core::{MatrixError, Shape, SharedDiagnostics, default_diagnostics};
use crate::types::Matrix;
use crate::helpers::find_jagged_row;

impl Matrix {
    /// Zero-filled `rows × cols` matrix reporting to the default sink
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::new_logged(rows, cols, default_diagnostics())
    }

    /// Zero-filled `rows × cols` matrix reporting to `diagnostics`
    ///
    /// A zero dimension is clamped to 1 with a warning.
    pub fn new_logged(rows: usize, cols: usize, diagnostics: SharedDiagnostics) -> Self {
        let rows = if rows == 0 {
            diagnostics.warn("Invalid rows quantity of matrix. Matrix will have 1 row (default value)");
            1
        } else {
            rows
        };
        let cols = if cols == 0 {
            diagnostics.warn("Invalid columns quantity of matrix. Matrix will have 1 column (default value)");
            1
        } else {
            cols
        };

        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
            diagnostics,
        }
    }

    /// `rows × cols` matrix copied from the top-left block of `source`
    pub fn with_source<R: AsRef<[f64]>>(rows: usize, cols: usize, source: &[R]) -> Self {
        Self::with_source_logged(rows, cols, source, default_diagnostics())
    }

    /// `rows × cols` matrix copied from the top-left block of `source`
    ///
    /// If `source` has fewer rows than requested, the row count shrinks to
    /// match. If its first row is shorter than `cols`, the row count is
    /// reset to the source's row count while `cols` is kept; cells the
    /// source does not provide are zero.
    pub fn with_source_logged<R: AsRef<[f64]>>(
        rows: usize,
        cols: usize,
        source: &[R],
        diagnostics: SharedDiagnostics,
    ) -> Self {
        let mut rows = if rows == 0 {
            diagnostics.warn("Invalid rows quantity of matrix. Matrix will have 1 row (default value)");
            1
        } else {
            rows
        };
        let cols = if cols == 0 {
            diagnostics.warn("Invalid columns quantity of matrix. Matrix will have 1 column (default value)");
            1
        } else {
            cols
        };

        if source.len() < rows {
            diagnostics.warn("Real rows quantity of matrix does not match parameter. Real rows quantity will be used");
            rows = source.len();
        }
        let first_len = source.first().map_or(0, |row| row.as_ref().len());
        if first_len < cols {
            // Known quirk: a short first row resets the row count, not the
            // column count.
            diagnostics.warn("Real columns quantity of matrix does not match parameter. Real columns quantity will be used");
            rows = source.len();
        }

        let mut m = Self::new_logged(rows, cols, diagnostics);
        m.fill_from(source);
        m
    }

    /// Matrix with dimensions inferred from `source`, reporting to the
    /// default sink
    pub fn from_rows<R: AsRef<[f64]>>(source: &[R]) -> Self {
        Self::from_rows_logged(source, default_diagnostics())
    }

    /// Matrix with dimensions inferred from `source`
    ///
    /// The first row fixes the column count. Jagged input is reported and
    /// then truncated or zero-padded to that width.
    pub fn from_rows_logged<R: AsRef<[f64]>>(source: &[R], diagnostics: SharedDiagnostics) -> Self {
        if find_jagged_row(source).is_some() {
            diagnostics.warn("The library is unable to work with jagged matrix. Matrix will get the 1st row columns count.");
        }
        let rows = source.len();
        let cols = source.first().map_or(0, |row| row.as_ref().len());

        let mut m = Self::new_logged(rows, cols, diagnostics);
        m.fill_from(source);
        m
    }

    /// Replace the contents in place
    ///
    /// Only the declared `rows × cols` block of `source` is copied. The
    /// matrix is left untouched if `source` is smaller than that block or
    /// jagged.
    pub fn set_contents<R: AsRef<[f64]>>(&mut self, source: &[R]) -> Result<(), MatrixError> {
        self.diagnostics.info(
            "If matrix you transferred has more rows (columns) than you define, redundant will be dropped."
        );

        let first_len = source.first().map_or(0, |row| row.as_ref().len());
        if source.len() < self.rows || first_len < self.cols {
            return Err(self.reject(MatrixError::dimension_mismatch(
                "set contents",
                self.shape(),
                Shape::new(source.len(), first_len),
            )));
        }
        if let Some((row, expected, found)) = find_jagged_row(source) {
            return Err(self.reject(MatrixError::JaggedInput { row, expected, found }));
        }

        self.fill_from(source);
        Ok(())
    }

    /// `n × n` identity where `n` is this matrix's row count
    pub fn identity(&self) -> Matrix {
        let n = self.rows;
        let mut c = self.blank(n, n);
        for i in 0..n {
            *c.at_mut(i, i) = 1.0;
        }
        c
    }

    /// Copy the overlapping block of `source`, leaving the rest unchanged
    fn fill_from<R: AsRef<[f64]>>(&mut self, source: &[R]) {
        let cols = self.cols;
        for (i, row) in source.iter().take(self.rows).enumerate() {
            let row = row.as_ref();
            let n = row.len().min(cols);
            self.data[i * cols..i * cols + n].copy_from_slice(&row[..n]);
        }
    }
}
