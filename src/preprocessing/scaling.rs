//! Мин-макс масштабирование признаков

#![allow(non_snake_case)]

use ndarray::{Array1, Array2};

use crate::error::MlError;
use crate::preprocessing::feature_engineering::SMOOTHING_EPS;

/// Масштабирование в [0, 1] по наблюдаемым min/max обучающей выборки.
///
/// После fit границы неизменны: transform не переоценивает их, поэтому
/// значения вне обучающего диапазона дают результат вне [0, 1], а не ошибку.
pub struct MinMaxScaler {
    min: Option<Array1<f64>>,
    max: Option<Array1<f64>>,
    epsilon: f64,
    is_fitted: bool,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            epsilon: SMOOTHING_EPS,
            is_fitted: false,
        }
    }

    /// С epsilon = 0 вырожденный признак становится ошибкой вместо предупреждения
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn fit(&mut self, X: &Array2<f64>) -> Result<(), MlError> {
        if X.nrows() == 0 {
            return Err(MlError::EmptyDataset);
        }

        let n_features = X.ncols();
        let mut min = Array1::from_elem(n_features, f64::INFINITY);
        let mut max = Array1::from_elem(n_features, f64::NEG_INFINITY);

        for row in X.rows() {
            for (j, val) in row.iter().enumerate() {
                min[j] = min[j].min(*val);
                max[j] = max[j].max(*val);
            }
        }

        // Признак с нулевой дисперсией: знаменатель спасает только epsilon
        for j in 0..n_features {
            if max[j] == min[j] {
                if self.epsilon == 0.0 {
                    return Err(MlError::DegenerateFeature { column: j });
                }
                tracing::warn!("feature column {} has zero variance, smoothing with epsilon", j);
            }
        }

        self.min = Some(min);
        self.max = Some(max);
        self.is_fitted = true;
        Ok(())
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>, MlError> {
        let (min, max) = self.bounds()?;

        if X.ncols() != min.len() {
            return Err(MlError::DimensionMismatch {
                expected: min.len(),
                got: X.ncols(),
            });
        }

        let mut scaled = X.clone();
        for mut row in scaled.rows_mut() {
            for (j, val) in row.iter_mut().enumerate() {
                *val = (*val - min[j]) / (max[j] - min[j] + self.epsilon);
            }
        }

        Ok(scaled)
    }

    /// Масштабирование одной строки (онлайн-предсказание)
    pub fn transform_row(&self, x: &Array1<f64>) -> Result<Array1<f64>, MlError> {
        let (min, max) = self.bounds()?;

        if x.len() != min.len() {
            return Err(MlError::DimensionMismatch {
                expected: min.len(),
                got: x.len(),
            });
        }

        let mut scaled = x.clone();
        for (j, val) in scaled.iter_mut().enumerate() {
            *val = (*val - min[j]) / (max[j] - min[j] + self.epsilon);
        }

        Ok(scaled)
    }

    pub fn fit_transform(&mut self, X: &Array2<f64>) -> Result<Array2<f64>, MlError> {
        self.fit(X)?;
        self.transform(X)
    }

    fn bounds(&self) -> Result<(&Array1<f64>, &Array1<f64>), MlError> {
        if !self.is_fitted {
            return Err(MlError::NotFitted);
        }
        let min = self.min.as_ref().ok_or(MlError::NotFitted)?;
        let max = self.max.as_ref().ok_or(MlError::NotFitted)?;
        Ok((min, max))
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_transform_bounds() {
        let X = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];

        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();

        // Обучающие значения лежат в [0, 1] с точностью до epsilon
        for val in scaled.iter() {
            assert!(*val >= 0.0 && *val <= 1.0);
        }
        assert!(scaled[[0, 0]].abs() < 1e-9);
        assert!((scaled[[2, 0]] - 2.0 / (2.0 + SMOOTHING_EPS)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_matches_closed_form() {
        let X = array![[1.0, 5.0], [3.0, 9.0], [2.0, 7.0]];

        let mut scaler = MinMaxScaler::new();
        scaler.fit(&X).unwrap();
        let scaled = scaler.transform(&X).unwrap();

        for i in 0..X.nrows() {
            for j in 0..X.ncols() {
                let min = X.column(j).iter().cloned().fold(f64::INFINITY, f64::min);
                let max = X.column(j).iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let expected = (X[[i, j]] - min) / (max - min + SMOOTHING_EPS);
                assert!((scaled[[i, j]] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_transform_does_not_refit() {
        let X_train = array![[0.0], [10.0]];
        let X_new = array![[20.0]];

        let mut scaler = MinMaxScaler::new();
        scaler.fit(&X_train).unwrap();

        // Значение вне обучающего диапазона выходит за [0, 1], но не ошибка
        let scaled = scaler.transform(&X_new).unwrap();
        assert!(scaled[[0, 0]] > 1.0);

        // Границы не сдвинулись
        let again = scaler.transform(&X_train).unwrap();
        assert!(again[[0, 0]].abs() < 1e-9);
    }

    #[test]
    fn test_transform_row_matches_batch() {
        let X = array![[1.0, 5.0], [3.0, 9.0]];

        let mut scaler = MinMaxScaler::new();
        scaler.fit(&X).unwrap();

        let batch = scaler.transform(&X).unwrap();
        let row = scaler.transform_row(&array![1.0, 5.0]).unwrap();

        assert!((batch[[0, 0]] - row[0]).abs() < 1e-12);
        assert!((batch[[0, 1]] - row[1]).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_feature_with_zero_epsilon() {
        let X = array![[1.0, 2.0], [1.0, 3.0]];

        let mut scaler = MinMaxScaler::new().with_epsilon(0.0);
        match scaler.fit(&X) {
            Err(MlError::DegenerateFeature { column }) => assert_eq!(column, 0),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_feature_smoothed_by_default() {
        let X = array![[1.0, 2.0], [1.0, 3.0]];

        let mut scaler = MinMaxScaler::new();
        let scaled = scaler.fit_transform(&X).unwrap();

        // Константный столбец схлопывается в ноль
        assert!(scaled[[0, 0]].abs() < 1e-12);
        assert!(scaled[[1, 0]].abs() < 1e-12);
    }

    #[test]
    fn test_not_fitted() {
        let scaler = MinMaxScaler::new();
        assert!(matches!(
            scaler.transform(&array![[1.0]]),
            Err(MlError::NotFitted)
        ));
    }
}
