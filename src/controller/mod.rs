// Controller module - the upload-and-analyze flow as an explicit state machine.
// Event methods mutate `Controller`; `Controller::render` maps state to a `View`
// the GUI draws. Async work is handed out as jobs tagged with a `Ticket`.

pub mod state;
pub mod view;


pub use state::{AnalysisJob, Completion, Controller, DecodeJob, Ticket, ViewState};
pub use view::{
    ANALYZE_BUSY_LABEL, ANALYZE_IDLE_LABEL, BarView, FAILURE_MESSAGE, FAILURE_TITLE, PreviewView,
    ResultView, View, headline, percent, render_result,
};
