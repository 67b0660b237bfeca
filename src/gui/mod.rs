// gui/mod.rs
// GUI module root for mri-scan-analyzer

pub mod util;
mod components {
    pub mod analyze_button;
    pub mod drop_zone;
    pub mod model_picker;
    pub mod result_panel;
}
pub mod app; // window + root component
