use thiserror::Error;

/// A specialized `Result` type for prediction requests.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Every way a prediction round trip can fail. The UI collapses all of them
/// into one alert; the variant only matters for the log.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Request to prediction service failed: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    #[error("Prediction service answered with HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Could not parse prediction response: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid content type '{media_type}' for upload: {source}")]
    InvalidContentType {
        media_type: String,
        source: reqwest::Error,
    },
}

impl AnalysisError {
    /// True when the service was reached but returned something unusable.
    pub fn is_server_side(&self) -> bool {
        matches!(self, AnalysisError::Status { .. } | AnalysisError::Parse { .. })
    }
}
