/// Модуль предобработки данных

pub mod feature_engineering;
pub mod scaling;
pub mod splitting;

pub use feature_engineering::{FeatureEngineer, ENGINEERED_FEATURES, RAW_FEATURES, SMOOTHING_EPS};
pub use scaling::MinMaxScaler;
pub use splitting::{train_test_split, Split};
