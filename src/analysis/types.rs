// Wire types for the prediction service
use crate::selection::SelectedFile;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Class label the service uses for a clean scan.
pub const NO_TUMOR_CLASS: &str = "No Tumor";

/// Probability bars in display order: (element id, response key, display label).
pub const CLASS_BARS: [(&str, &str, &str); 4] = [
    ("glioma", "Glioma", "Glioma"),
    ("meningioma", "Meningioma", "Meningioma"),
    ("pituitary", "Pituitary", "Pituitary"),
    ("normal", NO_TUMOR_CLASS, "No Tumor"),
];

/// Models the backend can route a scan to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelId {
    #[default]
    Baseline,
    Inception,
    Unet,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Baseline, ModelId::Inception, ModelId::Unet];

    /// Value sent as the `model_id` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Baseline => "baseline",
            ModelId::Inception => "inception",
            ModelId::Unet => "unet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Baseline => "Baseline CNN",
            ModelId::Inception => "Inception V3",
            ModelId::Unet => "U-Net",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown model '{s}', expected baseline, inception or unet"))
    }
}

/// One upload: the selected image plus the model to run it through.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub file: SelectedFile,
    pub model: ModelId,
}

/// Successful response body. The backend is trusted, so nothing here is
/// validated: probabilities need not sum to one and missing keys are allowed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: HashMap<String, f64>,
}

impl Prediction {
    pub fn is_no_tumor(&self) -> bool {
        self.class_name == NO_TUMOR_CLASS
    }

    /// Probability for a response key, `NaN` when the service omitted it.
    pub fn probability(&self, class_key: &str) -> f64 {
        self.probabilities
            .get(class_key)
            .copied()
            .unwrap_or(f64::NAN)
    }
}
