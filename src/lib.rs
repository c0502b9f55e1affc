//! Housing ML - Rust библиотека

pub mod data;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod types;

pub use error::MlError;
pub use models::*;
pub use preprocessing::*;
pub use types::*;

// Re-export для удобства
pub use evaluation::Evaluator;
pub use pipeline::HousingPipeline;
