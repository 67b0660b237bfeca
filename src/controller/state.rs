// Upload-and-analyze state machine
use crate::analysis::{AnalysisError, AnalysisRequest, AnalysisResult, ModelId, Prediction};
use crate::selection::{Preview, SelectedFile, SelectionError, SelectionResult};

/// Identifies one asynchronous job so late completions can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Empty,
    /// File stored, preview still being generated.
    Decoding { file: SelectedFile, ticket: Ticket },
    Selected { file: SelectedFile, preview: Preview },
    Analyzing {
        file: SelectedFile,
        preview: Preview,
        ticket: Ticket,
    },
    Result {
        file: SelectedFile,
        preview: Preview,
        prediction: Prediction,
    },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Empty => "Empty",
            ViewState::Decoding { .. } => "Decoding",
            ViewState::Selected { .. } => "Selected",
            ViewState::Analyzing { .. } => "Analyzing",
            ViewState::Result { .. } => "Result",
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            ViewState::Empty => None,
            ViewState::Decoding { file, .. }
            | ViewState::Selected { file, .. }
            | ViewState::Analyzing { file, .. }
            | ViewState::Result { file, .. } => Some(file),
        }
    }
}

/// Preview work handed out when a file is accepted.
#[derive(Debug, Clone)]
pub struct DecodeJob {
    pub ticket: Ticket,
    pub file: SelectedFile,
}

/// Upload work handed out when analysis starts.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub ticket: Ticket,
    pub request: AnalysisRequest,
}

/// What happened to a finished analysis.
#[derive(Debug)]
pub enum Completion {
    Rendered,
    Failed(AnalysisError),
    /// The job was abandoned (file removed) before it finished.
    Stale,
}

/// Owns the selected file and every piece of state the surfaces display.
/// All mutation happens through the event methods below; surfaces only ever
/// see the `View` produced by `render`.
#[derive(Debug, Default)]
pub struct Controller {
    pub(super) state: ViewState,
    pub(super) drag_active: bool,
    pub(super) notice: Option<String>,
    pub(super) model: ModelId,
    /// A failed analysis is being reported; every control waits for dismissal.
    pub(super) failure_alert_open: bool,
    next_ticket: u64,
}

impl Controller {
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.state.selected_file()
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, ViewState::Analyzing { .. })
    }

    pub fn is_failure_alert_open(&self) -> bool {
        self.failure_alert_open
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn set_state(&mut self, next: ViewState) {
        log::debug!("{} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    /// Click on the drop target. Returns true when the file chooser should open;
    /// once a file is held only the remove control gets back to empty.
    pub fn click_drop_target(&self) -> bool {
        !self.failure_alert_open && self.selected_file().is_none()
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Files dropped on the target. Only the first one is considered.
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> Option<DecodeJob> {
        self.drag_active = false;
        self.accept_first(files, "drop")
    }

    /// Files returned by the native chooser. Same image filter as drops.
    pub fn choose_files(&mut self, files: Vec<SelectedFile>) -> Option<DecodeJob> {
        self.accept_first(files, "chooser")
    }

    /// A file could not even be read from disk.
    pub fn selection_failed(&mut self, error: &SelectionError) {
        log::warn!("Selection failed: {error}");
        if self.selected_file().is_none() {
            self.notice = Some(error.notice());
        }
    }

    fn accept_first(&mut self, files: Vec<SelectedFile>, source: &str) -> Option<DecodeJob> {
        let file = files.into_iter().next()?;
        if self.is_analyzing() {
            log::info!("Ignoring {source} of {} while analysis is running", file.name());
            return None;
        }
        if self.failure_alert_open {
            log::info!("Ignoring {source} of {} until the failure alert is dismissed", file.name());
            return None;
        }
        let file = match file.ensure_image() {
            Ok(file) => file,
            Err(e) => {
                log::debug!("Ignoring {source}: {e}");
                return None;
            }
        };
        log::info!("Selected {} ({}) via {source}", file.name(), file.media_type());
        let ticket = self.issue_ticket();
        self.notice = None;
        self.set_state(ViewState::Decoding {
            file: file.clone(),
            ticket,
        });
        Some(DecodeJob { ticket, file })
    }

    /// Preview generation finished. A failure discards the selection.
    pub fn preview_ready(&mut self, ticket: Ticket, outcome: SelectionResult<Preview>) {
        let file = match &self.state {
            ViewState::Decoding { file, ticket: t } if *t == ticket => file.clone(),
            _ => {
                log::debug!("Discarding stale preview {ticket:?}");
                return;
            }
        };
        match outcome {
            Ok(preview) => self.set_state(ViewState::Selected { file, preview }),
            Err(e) => {
                log::error!("Preview generation failed: {e}");
                self.notice = Some(e.notice());
                self.set_state(ViewState::Empty);
            }
        }
    }

    /// Remove control. Returns the ticket of an analysis that was abandoned,
    /// so the caller can cancel its task.
    pub fn remove(&mut self) -> Option<Ticket> {
        if self.failure_alert_open {
            log::debug!("Ignoring remove while the failure alert is open");
            return None;
        }
        let abandoned = match &self.state {
            ViewState::Analyzing { ticket, .. } => Some(*ticket),
            _ => None,
        };
        if let Some(file) = self.selected_file() {
            log::info!("Removed {}", file.name());
        }
        self.notice = None;
        self.set_state(ViewState::Empty);
        abandoned
    }

    pub fn set_model(&mut self, model: ModelId) {
        if self.failure_alert_open {
            return;
        }
        self.model = model;
    }

    /// Analyze trigger. `None` unless a previewed file is held, nothing is
    /// in flight and no failure alert is waiting.
    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        if self.failure_alert_open {
            return None;
        }
        let (file, preview) = match &self.state {
            ViewState::Selected { file, preview } | ViewState::Result { file, preview, .. } => {
                (file.clone(), preview.clone())
            }
            _ => return None,
        };
        let ticket = self.issue_ticket();
        let request = AnalysisRequest {
            file: file.clone(),
            model: self.model,
        };
        self.set_state(ViewState::Analyzing {
            file,
            preview,
            ticket,
        });
        Some(AnalysisJob { ticket, request })
    }

    /// Round trip finished. Every outcome leaves the analyzing state; a
    /// failure also holds the controls until `dismiss_failure_alert`.
    pub fn finish_analysis(
        &mut self,
        ticket: Ticket,
        outcome: AnalysisResult<Prediction>,
    ) -> Completion {
        let (file, preview) = match &self.state {
            ViewState::Analyzing {
                file,
                preview,
                ticket: t,
            } if *t == ticket => (file.clone(), preview.clone()),
            _ => {
                log::debug!("Discarding stale analysis {ticket:?}");
                return Completion::Stale;
            }
        };
        match outcome {
            Ok(prediction) => {
                self.set_state(ViewState::Result {
                    file,
                    preview,
                    prediction,
                });
                Completion::Rendered
            }
            Err(e) => {
                self.set_state(ViewState::Selected { file, preview });
                self.failure_alert_open = true;
                Completion::Failed(e)
            }
        }
    }

    /// The user closed the failure alert; controls return to idle.
    pub fn dismiss_failure_alert(&mut self) {
        self.failure_alert_open = false;
    }
}
