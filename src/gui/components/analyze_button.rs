// gui/components/analyze_button.rs
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AnalyzeButtonProps {
    pub enabled: bool,
    pub label: &'static str,
    pub spinner_visible: bool,
    pub on_click: EventHandler<()>,
}

#[component]
pub fn AnalyzeButton(props: AnalyzeButtonProps) -> Element {
    let on_click = props.on_click;
    let enabled = props.enabled;
    rsx! {
        button { id: "analyze-btn",
            class: if enabled { "" } else { "disabled" },
            disabled: !enabled,
            style: { let style: &str = if props.spinner_visible { "background:linear-gradient(45deg,#ff6b35,#f7931e); color:white; padding:15px 25px; border:none; border-radius:10px; cursor:wait; font-size:1.1em; font-weight:bold; width:100%; display:flex; align-items:center; justify-content:center; gap:10px;" } else if enabled { "background:linear-gradient(45deg,#28a745,#20c997); color:white; padding:15px 25px; border:none; border-radius:10px; cursor:pointer; font-size:1.1em; font-weight:bold; width:100%; display:flex; align-items:center; justify-content:center; gap:10px;" } else { "background:rgba(255,255,255,0.15); color:rgba(255,255,255,0.5); padding:15px 25px; border:none; border-radius:10px; cursor:not-allowed; font-size:1.1em; font-weight:bold; width:100%; display:flex; align-items:center; justify-content:center; gap:10px;" }; style },
            onclick: move |_| { if enabled { on_click.call(()) } },
            span { class: "btn-text", "{props.label}" }
            if props.spinner_visible {
                span { class: "loader", style: "width:16px; height:16px; border:3px solid rgba(255,255,255,0.35); border-top-color:#fff; border-radius:50%; animation:spin 0.8s linear infinite;" }
            }
        }
    }
}
