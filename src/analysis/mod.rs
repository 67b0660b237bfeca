// Analysis module - talks to the remote prediction service.
// One multipart POST per analysis; the JSON answer is trusted as-is.

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_PREDICT_ENDPOINT, PredictionClient};
pub use error::{AnalysisError, AnalysisResult};
pub use types::{AnalysisRequest, CLASS_BARS, ModelId, NO_TUMOR_CLASS, Prediction};
