//! Разделение датасета на обучающую и тестовую выборки

#![allow(non_snake_case)]

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::MlError;

#[derive(Debug, Clone)]
pub struct Split {
    pub X_train: Array2<f64>,
    pub X_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Перемешивание с фиксированным seed: одинаковые входы дают одинаковое разбиение.
/// Длина train - floor((1 - test_fraction) * n), остаток уходит в test.
pub fn train_test_split(
    X: &Array2<f64>,
    y: &Array1<f64>,
    test_fraction: f64,
    seed: u64,
) -> Result<Split, MlError> {
    let n = X.nrows();

    if n != y.len() {
        return Err(MlError::DimensionMismatch {
            expected: n,
            got: y.len(),
        });
    }
    if n == 0 {
        return Err(MlError::EmptyDataset);
    }

    let train_len = ((1.0 - test_fraction) * n as f64) as usize;
    let test_len = n - train_len;

    if train_len == 0 || test_len == 0 {
        return Err(MlError::InsufficientData { needed: 2, got: n });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train_indices = &indices[..train_len];
    let test_indices = &indices[train_len..];

    let X_train = X.select(Axis(0), train_indices);
    let X_test = X.select(Axis(0), test_indices);
    let y_train = Array1::from_iter(train_indices.iter().map(|&i| y[i]));
    let y_test = Array1::from_iter(test_indices.iter().map(|&i| y[i]));

    Ok(Split {
        X_train,
        X_test,
        y_train,
        y_test,
    })
}
