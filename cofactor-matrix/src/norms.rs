//! Matrix norms

use crate::types::Matrix;

impl Matrix {
    /// m-norm: largest absolute row sum
    pub fn m_norm(&self) -> f64 {
        self.data.chunks(self.cols)
            .map(|row| row.iter().map(|x| x.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    /// l-norm: largest absolute column sum
    pub fn l_norm(&self) -> f64 {
        self.transpose().m_norm()
    }

    /// k-norm (Frobenius): square root of the sum of squared magnitudes
    pub fn k_norm(&self) -> f64 {
        self.data.iter().map(|x| x.abs().powi(2)).sum::<f64>().sqrt()
    }
}
