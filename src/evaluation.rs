//! Метрики качества регрессии

#![allow(non_snake_case)]

use ndarray::{Array1, Array2};

use crate::error::MlError;
use crate::models::Regressor;
use crate::types::ModelMetrics;

pub struct Evaluator;

impl Evaluator {
    /// Средняя абсолютная ошибка
    pub fn mae(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64, MlError> {
        if y_true.len() != y_pred.len() {
            return Err(MlError::DimensionMismatch {
                expected: y_true.len(),
                got: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(MlError::EmptyDataset);
        }

        Ok(y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (t - p).abs())
            .sum::<f64>()
            / y_true.len() as f64)
    }

    /// Коэффициент детерминации. На целях с нулевой дисперсией
    /// метрика не определена - это ошибка, а не тихий NaN.
    pub fn r2(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64, MlError> {
        if y_true.len() != y_pred.len() {
            return Err(MlError::DimensionMismatch {
                expected: y_true.len(),
                got: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(MlError::UndefinedMetric);
        }

        let mean = y_true.mean().unwrap_or(0.0);

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return Err(MlError::UndefinedMetric);
        }

        Ok(1.0 - ss_res / ss_tot)
    }

    /// Оценка обученной модели на отложенной тестовой выборке
    pub fn evaluate(
        model: &dyn Regressor,
        X_test: &Array2<f64>,
        y_test: &Array1<f64>,
    ) -> Result<ModelMetrics, MlError> {
        let predictions = model.predict(X_test)?;

        Ok(ModelMetrics {
            mae: Self::mae(y_test, &predictions)?,
            r2: Self::r2(y_test, &predictions)?,
        })
    }
}
