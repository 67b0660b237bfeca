// Windowless analysis: drives the same controller the GUI uses
use crate::analysis::{AnalysisError, PredictionClient};
use crate::config::AppConfig;
use crate::controller::{Completion, Controller, ResultView};
use crate::selection::{SelectedFile, SelectionError, decode_preview};
use std::path::Path;
use thiserror::Error;

const BAR_COLUMNS: usize = 30;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("'{name}' is not an image (detected {media_type})")]
    Rejected { name: String, media_type: String },

    #[error("'{0}' had no preview to analyze")]
    NotReady(String),

    #[error("Analysis of '{0}' finished without a result")]
    NoResult(String),
}

/// Select, preview, upload and render one file.
pub async fn analyze_path(path: &Path, config: &AppConfig) -> Result<ResultView, HeadlessError> {
    let file = SelectedFile::read(path).await?;
    let (name, media_type) = (file.name().to_string(), file.media_type().to_string());

    let mut controller = Controller::new(config.default_model);
    let job = controller
        .choose_files(vec![file])
        .ok_or_else(|| HeadlessError::Rejected {
            name: name.clone(),
            media_type,
        })?;
    let preview = decode_preview(job.file).await?;
    controller.preview_ready(job.ticket, Ok(preview));

    let job = controller
        .begin_analysis()
        .ok_or_else(|| HeadlessError::NotReady(name.clone()))?;
    let client = PredictionClient::new(config.endpoint.clone());
    let outcome = client.predict(&job.request).await;
    match controller.finish_analysis(job.ticket, outcome) {
        Completion::Rendered => {}
        Completion::Failed(e) => return Err(e.into()),
        Completion::Stale => return Err(HeadlessError::NoResult(name)),
    }

    controller
        .render()
        .result
        .ok_or(HeadlessError::NoResult(name))
}

/// Text rendition of the result panel.
pub fn format_result(result: &ResultView) -> String {
    let mut out = format!("{}\n{}\n", result.headline, result.confidence_tag);
    for bar in &result.bars {
        let filled = if bar.value.is_finite() {
            (bar.value.clamp(0.0, 1.0) * BAR_COLUMNS as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<11} [{}{}] {}\n",
            bar.label,
            "#".repeat(filled),
            " ".repeat(BAR_COLUMNS - filled),
            bar.value_text
        ));
    }
    out
}
