// Pure mapping from controller state to what the surfaces show
use super::state::{Controller, ViewState};
use crate::analysis::{CLASS_BARS, ModelId, Prediction};
use crate::selection::Preview;
use std::sync::Arc;

pub const ANALYZE_IDLE_LABEL: &str = "Initiate Analysis";
pub const ANALYZE_BUSY_LABEL: &str = "Analysing MRI Scan...";
pub const FAILURE_TITLE: &str = "Analysis failed";
pub const FAILURE_MESSAGE: &str = "Error during analysis. Please ensure the backend is running.";

/// Everything the window needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub drop_zone_active: bool,
    pub empty_content_visible: bool,
    /// Name of the file whose preview is being generated.
    pub reading_file: Option<String>,
    pub notice: Option<String>,
    pub preview: Option<PreviewView>,
    pub model: ModelId,
    pub analyze_enabled: bool,
    pub analyze_label: &'static str,
    pub spinner_visible: bool,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub src: Arc<str>,
    pub file_name: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub headline: String,
    pub confidence_tag: String,
    pub bars: Vec<BarView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub id: &'static str,
    pub label: &'static str,
    /// Raw probability, NaN when the service omitted the class.
    pub value: f64,
    /// CSS width, e.g. `87.3%`.
    pub width: String,
    pub value_text: String,
}

/// `0.873` -> `87.3`. Ties round away from zero (`0.1225` -> `12.3`), NaN
/// stays NaN.
pub fn percent(value: f64) -> String {
    let tenths = (value * 100.0 * 10.0).round();
    format!("{:.1}", tenths / 10.0)
}

pub fn headline(prediction: &Prediction) -> String {
    if prediction.is_no_tumor() {
        "No Tumor Detected".to_string()
    } else {
        format!("{} Detected", prediction.class_name)
    }
}

pub fn render_result(prediction: &Prediction) -> ResultView {
    let bars = CLASS_BARS
        .iter()
        .map(|&(id, key, label)| {
            let value = prediction.probability(key);
            let pct = percent(value);
            BarView {
                id,
                label,
                value,
                width: format!("{pct}%"),
                value_text: format!("{pct}%"),
            }
        })
        .collect();
    ResultView {
        headline: headline(prediction),
        confidence_tag: format!("{}% Confidence", percent(prediction.confidence)),
        bars,
    }
}

fn preview_view(file_name: &str, preview: &Preview) -> PreviewView {
    PreviewView {
        src: preview.data_url.clone(),
        file_name: file_name.to_string(),
        caption: preview.caption(),
    }
}

impl Controller {
    pub fn render(&self) -> View {
        let mut view = View {
            drop_zone_active: self.drag_active,
            empty_content_visible: true,
            reading_file: None,
            notice: self.notice.clone(),
            preview: None,
            model: self.model,
            analyze_enabled: false,
            analyze_label: ANALYZE_IDLE_LABEL,
            spinner_visible: false,
            result: None,
        };
        match &self.state {
            ViewState::Empty => {}
            ViewState::Decoding { file, .. } => {
                view.reading_file = Some(file.name().to_string());
            }
            ViewState::Selected { file, preview } => {
                view.empty_content_visible = false;
                view.preview = Some(preview_view(file.name(), preview));
                view.analyze_enabled = true;
            }
            ViewState::Analyzing { file, preview, .. } => {
                view.empty_content_visible = false;
                view.preview = Some(preview_view(file.name(), preview));
                view.analyze_label = ANALYZE_BUSY_LABEL;
                view.spinner_visible = true;
            }
            ViewState::Result {
                file,
                preview,
                prediction,
            } => {
                view.empty_content_visible = false;
                view.preview = Some(preview_view(file.name(), preview));
                view.analyze_enabled = true;
                view.result = Some(render_result(prediction));
            }
        }
        // Loading affordances stay up until the failure alert is dismissed
        if self.failure_alert_open {
            view.analyze_enabled = false;
            view.analyze_label = ANALYZE_BUSY_LABEL;
            view.spinner_visible = true;
        }
        view
    }
}
