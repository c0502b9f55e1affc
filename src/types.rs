/// Типы данных для ML модуля

use serde::{Deserialize, Serialize};

/// Одна запись датасета: 8 сырых признаков + целевая цена
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingRecord {
    #[serde(rename = "MedInc")]
    pub med_inc: f64,
    #[serde(rename = "HouseAge")]
    pub house_age: f64,
    #[serde(rename = "AveRooms")]
    pub ave_rooms: f64,
    #[serde(rename = "AveBedrms")]
    pub ave_bedrms: f64,
    #[serde(rename = "Population")]
    pub population: f64,
    #[serde(rename = "AveOccup")]
    pub ave_occup: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "MedHouseVal")]
    pub med_house_val: f64,
}

impl HousingRecord {
    /// Сырые признаки в фиксированном порядке (без целевой переменной)
    pub fn raw_features(&self) -> [f64; 8] {
        [
            self.med_inc,
            self.house_age,
            self.ave_rooms,
            self.ave_bedrms,
            self.population,
            self.ave_occup,
            self.latitude,
            self.longitude,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mae: f64,
    pub r2: f64,
}

/// Результат офлайн-оценки одной модели на тестовой выборке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReport {
    pub model: String,
    pub metrics: ModelMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,
}

fn default_test_fraction() -> f64 { 0.2 }
fn default_seed() -> u64 { 42 }
fn default_neighbors() -> usize { 5 }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            seed: default_seed(),
            neighbors: default_neighbors(),
        }
    }
}
