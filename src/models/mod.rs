//! Регрессионные модели

#![allow(non_snake_case)]

use ndarray::{Array1, Array2};

use crate::error::MlError;

pub mod linear;
pub mod neighbors;

pub use linear::LinearRegressor;
pub use neighbors::KnnRegressor;

/// Общий контракт регрессионной модели: обучение на масштабированной
/// обучающей выборке и предсказание по произвольным масштабированным строкам.
pub trait Regressor {
    fn name(&self) -> &'static str;

    fn train(&mut self, X: &Array2<f64>, y: &Array1<f64>) -> Result<(), MlError>;

    fn predict(&self, X: &Array2<f64>) -> Result<Array1<f64>, MlError>;
}
