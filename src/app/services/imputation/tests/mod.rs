//! Test utilities for the imputation service
//!
//! Provides small deterministic matrices with known linear structure used
//! across the solver, regressor and engine tests.

use ndarray::Array2;

// Test modules
mod engine_tests;

/// Build a matrix where the last column is an exact linear function of the
/// first two: `col2 = 2*col0 + 3*col1 + 1`
pub fn linear_matrix(rows: usize) -> Array2<f64> {
    let mut matrix = Array2::zeros((rows, 3));
    for i in 0..rows {
        let a = i as f64;
        let b = ((i % 4) as f64) * 1.5 - 2.0;
        matrix[[i, 0]] = a;
        matrix[[i, 1]] = b;
        matrix[[i, 2]] = 2.0 * a + 3.0 * b + 1.0;
    }
    matrix
}
