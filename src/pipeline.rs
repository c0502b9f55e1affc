//! Пайплайн обучения и онлайн-предсказаний

#![allow(non_snake_case)]

use std::collections::{BTreeMap, HashMap};

use ndarray::Axis;

use crate::error::MlError;
use crate::evaluation::Evaluator;
use crate::models::{KnnRegressor, LinearRegressor, Regressor};
use crate::preprocessing::{train_test_split, FeatureEngineer, MinMaxScaler};
use crate::types::{HousingRecord, ModelReport, PipelineConfig};

/// Готовый к предсказаниям пайплайн: масштабатор обучен, обе модели обучены.
///
/// Единственный экземпляр масштабатора принадлежит пайплайну; модели видят
/// только уже масштабированные матрицы, поэтому онлайн-предсказания
/// гарантированно используют то же преобразование, что и обучение.
/// После fit все обращения идут через &self - дообучение невозможно.
pub struct HousingPipeline {
    scaler: MinMaxScaler,
    models: Vec<Box<dyn Regressor>>,
    reports: Vec<ModelReport>,
}

impl HousingPipeline {
    /// Единственный путь к готовому пайплайну: инженерия признаков,
    /// разбиение, масштабирование, обучение и офлайн-оценка обеих моделей.
    pub fn fit(records: &[HousingRecord], config: &PipelineConfig) -> Result<Self, MlError> {
        let (X, y) = FeatureEngineer::build_matrix(records)?;
        let split = train_test_split(&X, &y, config.test_fraction, config.seed)?;

        if split.X_train.nrows() < config.neighbors {
            return Err(MlError::InsufficientData {
                needed: config.neighbors,
                got: split.X_train.nrows(),
            });
        }

        // Границы масштабатора оцениваются только по train, без утечки из test
        let mut scaler = MinMaxScaler::new();
        let X_train = scaler.fit_transform(&split.X_train)?;
        let X_test = scaler.transform(&split.X_test)?;

        let mut models: Vec<Box<dyn Regressor>> = vec![
            Box::new(LinearRegressor::new()),
            Box::new(KnnRegressor::new(config.neighbors)),
        ];

        let mut reports = Vec::with_capacity(models.len());
        for model in models.iter_mut() {
            model.train(&X_train, &split.y_train)?;

            let metrics = Evaluator::evaluate(model.as_ref(), &X_test, &split.y_test)?;
            tracing::info!(
                "Model {} trained. MAE: {:.4}, R2: {:.4}",
                model.name(),
                metrics.mae,
                metrics.r2
            );
            reports.push(ModelReport {
                model: model.name().to_string(),
                metrics,
            });
        }

        Ok(Self {
            scaler,
            models,
            reports,
        })
    }

    /// Предсказание по одному набору сырых значений.
    /// Ответ всегда полный: ошибка любой модели - ошибка всего вызова.
    pub fn predict_one(
        &self,
        raw: &HashMap<String, f64>,
    ) -> Result<BTreeMap<String, f64>, MlError> {
        let row = FeatureEngineer::engineer_input(raw)?;
        let scaled = self.scaler.transform_row(&row)?;
        let X = scaled.insert_axis(Axis(0));

        let mut predictions = BTreeMap::new();
        for model in &self.models {
            let pred = model.predict(&X)?;
            predictions.insert(model.name().to_string(), pred[0]);
        }

        Ok(predictions)
    }

    /// Офлайн-метрики моделей на отложенной выборке
    pub fn reports(&self) -> &[ModelReport] {
        &self.reports
    }
}
