use crate::analysis::{ModelId, PredictionClient};
use crate::config::AppConfig;
use crate::controller::{Completion, Controller, DecodeJob};
use crate::gui::components::{
    analyze_button::AnalyzeButton, drop_zone::DropZone, model_picker::ModelPicker,
    result_panel::ResultPanel,
};
use crate::gui::util::{dropped_paths, pick_image, show_failure_alert};
use crate::selection::{SelectedFile, decode_preview};
use dioxus::prelude::*;

const GLOBAL_CSS: &str = "@keyframes spin { to { transform: rotate(360deg); } } body { margin:0; font-family:'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }";

pub fn run_gui(config: AppConfig) {
    use dioxus::desktop::{Config, WindowBuilder};
    let enable_borderless = true; // borderless window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("MRI Scan Analyzer")
            .with_decorations(!enable_borderless)
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(900, 780)),
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    use dioxus::desktop::use_window; // access desktop window for dragging
    let desktop = use_window();
    let config = use_context::<AppConfig>();
    let mut controller = use_signal(|| Controller::new(config.default_model));
    let client = use_hook(|| PredictionClient::new(config.endpoint.clone()));
    let mut in_flight = use_signal(|| None::<Task>);

    // Preview generation for an accepted file
    let start_decode = move |job: DecodeJob| {
        spawn(async move {
            let outcome = decode_preview(job.file).await;
            controller.write().preview_ready(job.ticket, outcome);
        });
    };

    let on_browse = move |_| {
        if !controller.read().click_drop_target() {
            return;
        }
        spawn(async move {
            match pick_image().await {
                None => log::debug!("File chooser closed without a selection"),
                Some(Ok(file)) => {
                    let job = controller.write().choose_files(vec![file]);
                    if let Some(job) = job {
                        start_decode(job);
                    }
                }
                Some(Err(e)) => controller.write().selection_failed(&e),
            }
        });
    };

    let on_drop = move |evt: DragEvent| {
        controller.write().drag_leave();
        let Some(path) = dropped_paths(&evt).into_iter().next() else {
            log::debug!("Drop carried no files");
            return;
        };
        spawn(async move {
            match SelectedFile::read(&path).await {
                Ok(file) => {
                    let job = controller.write().drop_files(vec![file]);
                    if let Some(job) = job {
                        start_decode(job);
                    }
                }
                Err(e) => controller.write().selection_failed(&e),
            }
        });
    };

    let on_remove = move |_| {
        let abandoned = controller.write().remove();
        if abandoned.is_some() {
            if let Some(task) = in_flight.write().take() {
                log::info!("Cancelling in-flight analysis");
                task.cancel();
            }
        }
    };

    let on_analyze = move |_| {
        let job = controller.write().begin_analysis();
        let Some(job) = job else {
            return;
        };
        let client = client.clone();
        let task = spawn(async move {
            let outcome = client.predict(&job.request).await;
            in_flight.set(None);
            let completion = controller.write().finish_analysis(job.ticket, outcome);
            if let Completion::Failed(e) = completion {
                log::error!("Analysis failed: {e}");
                show_failure_alert().await;
                controller.write().dismiss_failure_alert();
            }
        });
        in_flight.set(Some(task));
    };

    let view = controller.read().render();

    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
        // Main app container: vertical layout, fills viewport
        div { style: "height:97vh; display:flex; flex-direction:column; background:linear-gradient(135deg,#1d2b64 0%,#4b2c82 100%); color:white; border:1px solid rgba(255,255,255,0.25); box-sizing:content-box;",
            // Scrollable content area
            div { style: "flex:1; overflow:auto; padding:8px;",
                div { style: "max-width:760px; margin:0 auto; display:flex; flex-direction:column; gap:12px;",
                    // Title bar doubles as the drag handle of the borderless window
                    div { style: "display:flex; align-items:center; gap:10px; padding:8px 12px; border-radius:10px; background:rgba(0,0,0,0.2); cursor:grab; user-select:none;",
                        onmousedown: move |_| { let _ = desktop.window.drag_window(); },
                        span { style: "font-size:1.4em;", "🧠" }
                        div { style: "flex:1; min-width:0;",
                            div { style: "font-size:1em; font-weight:600;", "MRI Scan Analyzer" }
                            div { style: "font-size:0.65em; opacity:0.6; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;", "{config.endpoint}" }
                        }
                        if view.spinner_visible {
                            span { style: "font-size:0.7em; color:#ffd700;", "● busy" }
                        }
                        button { title: "Quit",
                            style: "background:transparent; color:#fff; border:none; font-size:1.1em; cursor:pointer; opacity:0.8;",
                            onmousedown: move |evt: MouseEvent| evt.stop_propagation(),
                            onclick: move |_| {
                                log::info!("Window closed by user");
                                std::process::exit(0);
                            },
                            "✕"
                        }
                    }
                    DropZone {
                        active: view.drop_zone_active,
                        empty_content_visible: view.empty_content_visible,
                        reading_file: view.reading_file.clone(),
                        notice: view.notice.clone(),
                        preview: view.preview.clone(),
                        on_click: on_browse,
                        on_drag_over: move |_| controller.write().drag_over(),
                        on_drag_leave: move |_| controller.write().drag_leave(),
                        on_drop: on_drop,
                        on_remove: on_remove,
                    }
                    ModelPicker { selected: view.model, disabled: view.spinner_visible, on_select: move |model: ModelId| controller.write().set_model(model) }
                    AnalyzeButton { enabled: view.analyze_enabled, label: view.analyze_label, spinner_visible: view.spinner_visible, on_click: on_analyze }
                    if let Some(result) = view.result.clone() {
                        ResultPanel { result: result }
                    }
                    // Credits/footer
                    div { style: "margin-top:4px; text-align:left; font-size:0.7em; opacity:0.75; letter-spacing:0.5px;",
                        {format!("v{} · © {} · Built with Rust 🦀 and Dioxus ⚛️", env!("APP_VERSION_DISPLAY"), env!("APP_BUILD_YEAR"))}
                    }
                }
            }
        }
    }
}
