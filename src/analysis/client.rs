// HTTP client for the prediction service
use super::error::{AnalysisError, AnalysisResult};
use super::types::{AnalysisRequest, Prediction};
use reqwest::multipart::{Form, Part};

pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Thin wrapper over a shared `reqwest::Client`; one POST per analysis,
/// no retry and no timeout.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Multipart body with the `file` and `model_id` fields.
    pub fn build_form(request: &AnalysisRequest) -> AnalysisResult<Form> {
        let media_type = request.file.media_type();
        let part = Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.name().to_string())
            .mime_str(media_type)
            .map_err(|source| AnalysisError::InvalidContentType {
                media_type: media_type.to_string(),
                source,
            })?;
        Ok(Form::new()
            .part("file", part)
            .text("model_id", request.model.as_str()))
    }

    pub async fn predict(&self, request: &AnalysisRequest) -> AnalysisResult<Prediction> {
        let form = Self::build_form(request)?;
        log::info!(
            "Uploading {} ({} bytes, {}) to {} with model '{}'",
            request.file.name(),
            request.file.bytes().len(),
            request.file.media_type(),
            self.endpoint,
            request.model
        );
        let start = std::time::Instant::now();

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status { status });
        }

        let body = response.bytes().await?;
        let prediction: Prediction = serde_json::from_slice(&body)?;
        log::info!(
            "Prediction '{}' ({:.3}) in {}ms",
            prediction.class_name,
            prediction.confidence,
            start.elapsed().as_millis()
        );
        Ok(prediction)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICT_ENDPOINT)
    }
}
