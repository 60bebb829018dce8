//! Tests for the imputation engine partition/fit/predict cycle

use std::collections::BTreeSet;

use ndarray::Array2;

use super::super::engine::ImputationEngine;
use super::linear_matrix;
use crate::Error;
use crate::config::{RegressorKind, RegressorParams};

fn engine() -> ImputationEngine {
    ImputationEngine::new(RegressorKind::OrdinaryLeastSquares, RegressorParams::default())
}

#[test]
fn test_empty_missing_columns_yields_empty_result() {
    let matrix = linear_matrix(10);
    let imputed = engine()
        .impute(&matrix, &BTreeSet::new(), &BTreeSet::new())
        .unwrap();

    assert!(imputed.is_empty());
    assert_eq!(imputed.len(), 0);
    assert!(imputed.scalar_map().is_none());
}

#[test]
fn test_all_rows_missing_is_insufficient_training_data() {
    let matrix = linear_matrix(3);
    let missing_rows: BTreeSet<usize> = (0..3).collect();
    let missing_cols = BTreeSet::from([2]);

    let err = engine()
        .impute(&matrix, &missing_rows, &missing_cols)
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientTrainingData { .. }));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_single_column_imputation_recovers_linear_value() {
    // col2 = 2*col0 + 3*col1 + 1; blank it out on rows 3 and 7
    let mut matrix = linear_matrix(12);
    let expected_3 = matrix[[3, 2]];
    let expected_7 = matrix[[7, 2]];
    matrix[[3, 2]] = 0.0;
    matrix[[7, 2]] = 0.0;

    let missing_rows = BTreeSet::from([3, 7]);
    let missing_cols = BTreeSet::from([2]);

    let imputed = engine().impute(&matrix, &missing_rows, &missing_cols).unwrap();

    assert_eq!(imputed.rows(), &[3, 7]);
    assert_eq!(imputed.columns(), &[2]);
    assert!((imputed.value(3, 2).unwrap() - expected_3).abs() < 1e-8);
    assert!((imputed.value(7, 2).unwrap() - expected_7).abs() < 1e-8);

    let scalar = imputed.scalar_map().unwrap();
    assert_eq!(scalar.len(), 2);
    assert!((scalar[&3] - expected_3).abs() < 1e-8);
}

#[test]
fn test_partition_totality() {
    let matrix = linear_matrix(8);
    let missing_rows = BTreeSet::from([1, 4, 6]);
    let missing_cols = BTreeSet::from([2]);

    let imputed = engine().impute(&matrix, &missing_rows, &missing_cols).unwrap();

    // complete and missing rows partition all rows with empty intersection
    let predicted: BTreeSet<usize> = imputed.rows().iter().copied().collect();
    assert_eq!(predicted, missing_rows);
    let complete: BTreeSet<usize> = (0..8).filter(|r| !missing_rows.contains(r)).collect();
    assert!(complete.is_disjoint(&predicted));
    assert_eq!(complete.len() + predicted.len(), 8);
}

#[test]
fn test_joint_fit_over_multiple_missing_columns() {
    // col1 and col2 both linear in col0; blank both on row 5
    let rows = 10;
    let mut matrix = Array2::zeros((rows, 3));
    for i in 0..rows {
        let a = i as f64;
        matrix[[i, 0]] = a;
        matrix[[i, 1]] = 4.0 * a - 2.0;
        matrix[[i, 2]] = -a + 3.0;
    }
    let expected_1 = matrix[[5, 1]];
    let expected_2 = matrix[[5, 2]];
    matrix[[5, 1]] = 0.0;
    matrix[[5, 2]] = 0.0;

    let missing_rows = BTreeSet::from([5]);
    let missing_cols = BTreeSet::from([1, 2]);

    let imputed = engine().impute(&matrix, &missing_rows, &missing_cols).unwrap();

    assert_eq!(imputed.columns(), &[1, 2]);
    assert!((imputed.value(5, 1).unwrap() - expected_1).abs() < 1e-8);
    assert!((imputed.value(5, 2).unwrap() - expected_2).abs() < 1e-8);
    // multi-column runs have no flat scalar view
    assert!(imputed.scalar_map().is_none());
}

#[test]
fn test_placeholder_zeros_do_not_leak_into_training() {
    // Identical matrices except for garbage in the masked cell: predictions
    // must match because the split comes from the tracker sets, not content.
    let mut clean = linear_matrix(12);
    clean[[4, 2]] = 0.0;
    let mut dirty = clean.clone();
    dirty[[4, 2]] = 123456.0;

    let missing_rows = BTreeSet::from([4]);
    let missing_cols = BTreeSet::from([2]);

    let from_clean = engine().impute(&clean, &missing_rows, &missing_cols).unwrap();
    let from_dirty = engine().impute(&dirty, &missing_rows, &missing_cols).unwrap();

    assert_eq!(from_clean.value(4, 2), from_dirty.value(4, 2));
}
