// gui/util.rs
// Native dialogs and drop helpers for the GUI

use crate::controller::{FAILURE_MESSAGE, FAILURE_TITLE};
use crate::selection::{IMAGE_EXTENSIONS, SelectedFile, SelectionResult};
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::PathBuf;

/// Opens the native chooser. `None` when the user cancels.
pub async fn pick_image() -> Option<SelectionResult<SelectedFile>> {
    let handle = AsyncFileDialog::new()
        .set_title("Choose an MRI scan")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;
    Some(SelectedFile::read(handle.path()).await)
}

/// Paths carried by a desktop drop, in drop order.
pub fn dropped_paths(evt: &DragEvent) -> Vec<PathBuf> {
    evt.files()
        .map(|engine| engine.files().into_iter().map(PathBuf::from).collect())
        .unwrap_or_default()
}

/// Blocking alert for any failed analysis; details only go to the log.
pub async fn show_failure_alert() {
    let _ = AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(FAILURE_TITLE)
        .set_description(FAILURE_MESSAGE)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
