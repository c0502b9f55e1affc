//! Линейная регрессия методом наименьших квадратов

#![allow(non_snake_case)]

use ndarray::{s, Array1, Array2};

use crate::error::MlError;
use crate::models::Regressor;

/// МНК через нормальные уравнения: β = (X'X)^(-1) X'y,
/// свободный член добавляется столбцом единиц. Гиперпараметров нет.
pub struct LinearRegressor {
    weights: Option<Array1<f64>>,
    bias: f64,
}

impl LinearRegressor {
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
        }
    }

    /// Решение системы методом Гаусса с выбором главного элемента
    fn solve(A: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, MlError> {
        let n = A.nrows();
        let mut augmented = Array2::zeros((n, n + 1));

        for i in 0..n {
            for j in 0..n {
                augmented[[i, j]] = A[[i, j]];
            }
            augmented[[i, n]] = b[i];
        }

        // Прямой ход
        for i in 0..n {
            let mut max_row = i;
            let mut max_val = augmented[[i, i]].abs();
            for k in (i + 1)..n {
                if augmented[[k, i]].abs() > max_val {
                    max_val = augmented[[k, i]].abs();
                    max_row = k;
                }
            }

            if max_row != i {
                for j in 0..=n {
                    let tmp = augmented[[i, j]];
                    augmented[[i, j]] = augmented[[max_row, j]];
                    augmented[[max_row, j]] = tmp;
                }
            }

            let pivot = augmented[[i, i]];
            if pivot.abs() < 1e-10 {
                return Err(MlError::SingularSystem);
            }

            for k in (i + 1)..n {
                let factor = augmented[[k, i]] / pivot;
                for j in i..=n {
                    augmented[[k, j]] -= factor * augmented[[i, j]];
                }
            }
        }

        // Обратный ход
        let mut x = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut sum = augmented[[i, n]];
            for j in (i + 1)..n {
                sum -= augmented[[i, j]] * x[j];
            }
            x[i] = sum / augmented[[i, i]];
        }

        Ok(x)
    }
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Regressor for LinearRegressor {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn train(&mut self, X: &Array2<f64>, y: &Array1<f64>) -> Result<(), MlError> {
        if X.nrows() == 0 {
            return Err(MlError::EmptyDataset);
        }
        if X.nrows() != y.len() {
            return Err(MlError::DimensionMismatch {
                expected: X.nrows(),
                got: y.len(),
            });
        }

        // Столбец единиц для свободного члена
        let mut design = Array2::ones((X.nrows(), X.ncols() + 1));
        design.slice_mut(s![.., 1..]).assign(X);

        let xtx = design.t().dot(&design);
        let xty = design.t().dot(y);

        let beta = Self::solve(&xtx, &xty)?;

        self.bias = beta[0];
        self.weights = Some(beta.slice(s![1..]).to_owned());

        Ok(())
    }

    fn predict(&self, X: &Array2<f64>) -> Result<Array1<f64>, MlError> {
        let weights = self.weights.as_ref().ok_or(MlError::NotFitted)?;

        if X.ncols() != weights.len() {
            return Err(MlError::DimensionMismatch {
                expected: weights.len(),
                got: X.ncols(),
            });
        }

        Ok(X.dot(weights) + self.bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_simple_line() {
        // y = 2 + 3x
        let X = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let y = array![5.0, 8.0, 11.0, 14.0, 17.0];

        let mut model = LinearRegressor::new();
        model.train(&X, &y).unwrap();

        let pred = model.predict(&array![[6.0]]).unwrap();
        assert!((pred[0] - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_two_features() {
        // y = 1 + 2*x1 - 3*x2
        let X = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0]
        ];
        let y = array![1.0, 3.0, -2.0, 0.0, 2.0];

        let mut model = LinearRegressor::new();
        model.train(&X, &y).unwrap();

        let pred = model.predict(&X).unwrap();
        for (p, t) in pred.iter().zip(y.iter()) {
            assert!((p - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_predict_before_train() {
        let model = LinearRegressor::new();
        assert!(matches!(
            model.predict(&array![[1.0]]),
            Err(MlError::NotFitted)
        ));
    }

    #[test]
    fn test_singular_system() {
        // Два одинаковых столбца дают вырожденную систему
        let X = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = LinearRegressor::new();
        assert!(matches!(
            model.train(&X, &y),
            Err(MlError::SingularSystem)
        ));
    }

    #[test]
    fn test_single_prediction_is_scalar() {
        let X = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 4.0, 6.0];

        let mut model = LinearRegressor::new();
        model.train(&X, &y).unwrap();

        let pred = model.predict(&array![[2.5]]).unwrap();
        assert_eq!(pred.len(), 1);
        assert!(pred[0].is_finite());
    }
}
