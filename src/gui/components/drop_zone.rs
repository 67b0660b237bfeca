// gui/components/drop_zone.rs
use crate::controller::PreviewView;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct DropZoneProps {
    pub active: bool,
    pub empty_content_visible: bool,
    pub reading_file: Option<String>,
    pub notice: Option<String>,
    pub preview: Option<PreviewView>,
    pub on_click: EventHandler<()>,
    pub on_drag_over: EventHandler<()>,
    pub on_drag_leave: EventHandler<()>,
    pub on_drop: EventHandler<DragEvent>,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let on_click = props.on_click;
    let on_drag_over = props.on_drag_over;
    let on_drag_leave = props.on_drag_leave;
    let on_drop = props.on_drop;
    let on_remove = props.on_remove;
    let clickable = props.preview.is_none();
    let zone_style = format!(
        "position:relative; min-height:260px; display:flex; align-items:center; justify-content:center; border-radius:15px; border:2px dashed {}; background:{}; cursor:{}; transition:all 0.2s ease;",
        if props.active { "#48ff9b" } else { "rgba(255,255,255,0.35)" },
        if props.active { "rgba(72,255,155,0.12)" } else { "rgba(255,255,255,0.08)" },
        if clickable { "pointer" } else { "default" },
    );
    rsx! {
        div { id: "drop-zone", style: "{zone_style}",
            onclick: move |_| on_click.call(()),
            ondragover: move |evt: DragEvent| { evt.prevent_default(); on_drag_over.call(()); },
            ondragleave: move |_| on_drag_leave.call(()),
            ondrop: move |evt: DragEvent| { evt.prevent_default(); on_drop.call(evt); },
            if props.empty_content_visible {
                div { class: "drop-zone-content", style: "text-align:center; padding:20px; pointer-events:none;",
                    div { style: "font-size:3em; margin-bottom:8px;", "🧠" }
                    if let Some(name) = &props.reading_file {
                        p { style: "margin:4px 0; font-size:1em;", "⏳ Reading {name}..." }
                    } else {
                        p { style: "margin:4px 0; font-size:1.1em; font-weight:600;", "Drag & drop an MRI scan here" }
                        p { style: "margin:4px 0; font-size:0.8em; opacity:0.7;", "or click to browse (PNG, JPEG, BMP, TIFF...)" }
                    }
                    if let Some(notice) = &props.notice {
                        p { style: "margin:10px 0 0 0; font-size:0.8em; color:#ffb347;", "⚠️ {notice}" }
                    }
                }
            }
            if let Some(preview) = &props.preview {
                div { id: "preview-container", style: "position:relative; display:flex; flex-direction:column; align-items:center; gap:6px; padding:12px;",
                    img { id: "image-preview", src: "{preview.src}", alt: "{preview.file_name}",
                        style: "max-width:100%; max-height:320px; border-radius:10px; border:4px solid rgba(255,255,255,0.2); box-shadow:0 4px 15px rgba(0,0,0,0.3); user-select:none;" }
                    button { id: "remove-btn", title: "Remove image",
                        style: "position:absolute; top:4px; right:4px; background:linear-gradient(135deg,#ff4d4d,#d63333); color:#fff; border:1px solid rgba(255,255,255,0.35); border-radius:50%; width:28px; height:28px; cursor:pointer; font-weight:bold;",
                        onclick: move |evt: MouseEvent| { evt.stop_propagation(); on_remove.call(()); },
                        "✖"
                    }
                    div { style: "font-size:0.75em; opacity:0.75;", "{preview.file_name} · {preview.caption}" }
                }
            }
        }
    }
}
