// Runtime configuration shared by the CLI and the GUI
use crate::analysis::{DEFAULT_PREDICT_ENDPOINT, ModelId};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where scans are POSTed.
    pub endpoint: String,
    /// Model checked when the window opens.
    pub default_model: ModelId,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
            default_model: ModelId::default(),
        }
    }
}
