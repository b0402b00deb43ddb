//! Cofactor demo
//!
//! Loads the logging configuration, then walks through the library:
//! products, determinants, adjugate and inverse, powers, norms and two
//! linear systems.

mod config;

use cofactor_matrix::{Matrix, MatrixError};
use config::LogConfig;

fn main() {
    let path = config::config_path();
    let log_config = match LogConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}; falling back to default logging", e);
            LogConfig::default()
        }
    };
    if let Err(e) = config::init_logging(&log_config) {
        eprintln!("{}", e);
    }
    tracing::info!(config = %path.display(), level = %log_config.level, "Cofactor demo started");

    if let Err(e) = run() {
        println!("{}", e);
        tracing::debug!(code = e.code(), "{}", e);
    }
}

fn run() -> Result<(), MatrixError> {
    let mut a = Matrix::new(2, 4);
    a.set_contents(&[[3.0, 2.0, 8.0, 1.0], [1.0, -4.0, 0.0, 3.0]])?;
    let mut b = Matrix::new(4, 2);
    b.set_contents(&[[2.0, -1.0], [1.0, -3.0], [0.0, 1.0], [3.0, 1.0]])?;
    let mut c = Matrix::new(2, 4);
    c.set_contents(&[[3.0, 2.0, 8.0, 1.0], [1.0, -4.0, 0.0, 3.0]])?;

    println!("Is C equal to A? {}", c == a);
    println!("Left operand");
    println!("{}", a);
    println!("Right operand:");
    println!("{}", b);

    let number = 3.0;
    println!("Multiplication by number {}", number);
    println!("{}", Matrix::number_mul_matrix(number, &c));
    println!("Division matrix by number of {}", number);
    println!("{}", c.div_by_number(number));

    let ab = a.mul(&b)?;
    println!("Multiplication of matrices:");
    println!("{}", ab);
    println!("{}", ab.det()?);

    let mut plain = Matrix::new(3, 3);
    plain.set_contents(&[[1.0, 2.0, 3.0], [-2.0, -4.0, -5.0], [3.0, 5.0, 6.0]])?;
    println!("Plain matrix");
    println!("{}", plain);
    println!("det = {}", plain.det()?);
    let (i, j) = (0, 1);
    println!("After deleting row#{} and column#{}: {}", i + 1, j + 1, plain.delete_row_column(i, j)?);
    println!("adjoint matrix: {}", plain.adj()?);
    println!("transposed matrix:");
    println!("{}", plain.transpose());
    println!("Is transpose correct? {}", plain.is_transpose_correct());
    println!("Inverse matrix:");
    println!("{}", plain.inverse()?);
    println!("Is inversion correct? {}", plain.is_inverse_correct()?);

    let mut shift = Matrix::new(4, 4);
    shift.set_contents(&[
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0, 0.0],
    ])?;
    println!("Square of 0-1-matrix: {}", shift.pow(2)?);

    let mut e = Matrix::new(3, 3);
    e.set_contents(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
    println!("Norms of matrix {}\n m: {} \n l: {} \n k: {}", e, e.m_norm(), e.l_norm(), e.k_norm());

    println!("System of linear algebraic equations (SLAE)#1:");
    let slae = Matrix::with_source(3, 4, &[
        [3.0, -1.0, 0.0, 5.0],
        [-2.0, 1.0, 1.0, 0.0],
        [2.0, -1.0, 4.0, 15.0],
    ]);
    println!("{}", Matrix::resolve_slae(&slae)?);

    println!("System of linear algebraic equations (SLAE)#2");
    let x2 = Matrix::resolve_slae_rows(&[
        [2.0, 1.0, -5.0, 1.0, 8.0],
        [1.0, -3.0, 0.0, -6.0, 9.0],
        [0.0, 2.0, -1.0, 2.0, -5.0],
        [1.0, 4.0, -7.0, 6.0, 0.0],
    ])?;
    println!("{}", x2);

    let f = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let g = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let h = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    println!("Sum F and G matrices: {}", f.add(&g)?);
    println!("Diff F and G matrices: {}", f.sub(&g)?);
    println!("Div G by H matrices: {}", g.div(&h)?);
    println!("Abs of SLAE#2 solution matrix: {}", x2.abs());
    println!("Mul SLAE#2 solution matrix by 1.5: {}", x2.mul_by_number(1.5));

    Ok(())
}
