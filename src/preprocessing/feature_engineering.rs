//! Feature engineering для моделей цен на жилье

use ndarray::{Array1, Array2};
use std::collections::HashMap;

use crate::error::MlError;
use crate::types::HousingRecord;

/// Сглаживание знаменателей производных признаков и масштабирования
pub const SMOOTHING_EPS: f64 = 1e-5;

/// Сырые признаки в том порядке, в котором их собирает интерфейс ввода
pub const RAW_FEATURES: [&str; 8] = [
    "MedInc",
    "HouseAge",
    "AveRooms",
    "AveBedrms",
    "Population",
    "AveOccup",
    "Latitude",
    "Longitude",
];

/// Полный набор признаков после инженерии: 8 сырых + 2 производных
pub const ENGINEERED_FEATURES: [&str; 10] = [
    "MedInc",
    "HouseAge",
    "AveRooms",
    "AveBedrms",
    "Population",
    "AveOccup",
    "Latitude",
    "Longitude",
    "Rooms_per_Occupant",
    "Bedrooms_per_Room",
];

pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Производные признаки из сырых значений.
    /// Отрицательные и нулевые сырые значения проходят без проверки.
    pub fn engineer(raw: &[f64; 8]) -> [f64; 10] {
        let ave_rooms = raw[2];
        let ave_bedrms = raw[3];
        let ave_occup = raw[5];

        let rooms_per_occupant = ave_rooms / (ave_occup + SMOOTHING_EPS);
        let bedrooms_per_room = ave_bedrms / (ave_rooms + SMOOTHING_EPS);

        [
            raw[0],
            raw[1],
            raw[2],
            raw[3],
            raw[4],
            raw[5],
            raw[6],
            raw[7],
            rooms_per_occupant,
            bedrooms_per_room,
        ]
    }

    /// Матрица признаков и вектор целей из записей датасета
    pub fn build_matrix(
        records: &[HousingRecord],
    ) -> Result<(Array2<f64>, Array1<f64>), MlError> {
        if records.is_empty() {
            return Err(MlError::EmptyDataset);
        }

        let n_samples = records.len();
        let n_features = ENGINEERED_FEATURES.len();

        let mut features = Array2::zeros((n_samples, n_features));
        let mut targets = Array1::zeros(n_samples);

        for (i, record) in records.iter().enumerate() {
            let row = Self::engineer(&record.raw_features());
            for (j, value) in row.iter().enumerate() {
                features[[i, j]] = *value;
            }
            targets[i] = record.med_house_val;
        }

        Ok((features, targets))
    }

    /// Строка признаков из пользовательского ввода.
    /// Каждый сырой признак обязан присутствовать, значений по умолчанию нет.
    pub fn engineer_input(values: &HashMap<String, f64>) -> Result<Array1<f64>, MlError> {
        let mut raw = [0.0; 8];
        for (i, name) in RAW_FEATURES.iter().enumerate() {
            raw[i] = *values.get(*name).ok_or_else(|| MlError::MissingFeature {
                name: (*name).to_string(),
            })?;
        }

        Ok(Array1::from_iter(Self::engineer(&raw)))
    }
}
