//! Регрессия по k ближайшим соседям

#![allow(non_snake_case)]

use ndarray::{Array1, Array2};

use crate::error::MlError;
use crate::models::Regressor;

/// Запоминает обучающую выборку и усредняет цели k ближайших строк
/// по евклидову расстоянию в масштабированном пространстве признаков.
///
/// Сортировка по расстоянию стабильная: при равных расстояниях на k-й
/// позиции выигрывают строки с меньшим индексом обучающей выборки.
pub struct KnnRegressor {
    k: usize,
    X_train: Option<Array2<f64>>,
    y_train: Option<Array1<f64>>,
}

impl KnnRegressor {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            X_train: None,
            y_train: None,
        }
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Regressor for KnnRegressor {
    fn name(&self) -> &'static str {
        "knn"
    }

    fn train(&mut self, X: &Array2<f64>, y: &Array1<f64>) -> Result<(), MlError> {
        if X.nrows() != y.len() {
            return Err(MlError::DimensionMismatch {
                expected: X.nrows(),
                got: y.len(),
            });
        }
        if self.k == 0 {
            return Err(MlError::InsufficientData { needed: 1, got: 0 });
        }
        if X.nrows() < self.k {
            return Err(MlError::InsufficientData {
                needed: self.k,
                got: X.nrows(),
            });
        }

        self.X_train = Some(X.clone());
        self.y_train = Some(y.clone());
        Ok(())
    }

    fn predict(&self, X: &Array2<f64>) -> Result<Array1<f64>, MlError> {
        let X_train = self.X_train.as_ref().ok_or(MlError::NotFitted)?;
        let y_train = self.y_train.as_ref().ok_or(MlError::NotFitted)?;

        if X.ncols() != X_train.ncols() {
            return Err(MlError::DimensionMismatch {
                expected: X_train.ncols(),
                got: X.ncols(),
            });
        }

        let mut predictions = Vec::with_capacity(X.nrows());

        for sample in X.rows() {
            let mut distances: Vec<(usize, f64)> = X_train
                .rows()
                .into_iter()
                .enumerate()
                .map(|(i, train_row)| (i, Self::distance(&sample.to_vec(), &train_row.to_vec())))
                .collect();

            distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            let mean = distances
                .iter()
                .take(self.k)
                .map(|(i, _)| y_train[*i])
                .sum::<f64>()
                / self.k as f64;

            predictions.push(mean);
        }

        Ok(Array1::from_vec(predictions))
    }
}
