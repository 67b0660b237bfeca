// gui/components/result_panel.rs
use crate::controller::ResultView;
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub result: ResultView,
}

/// Mounted only while a result is shown, so every appearance scrolls into view.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let result = &props.result;
    rsx! {
        div { id: "result-section",
            style: "background: rgba(255,255,255,0.1); backdrop-filter: blur(10px); padding: 20px; border-radius: 15px; border: 1px solid rgba(255,255,255,0.2);",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.scroll_to(ScrollBehavior::Smooth).await {
                    log::debug!("Result scroll failed: {e:?}");
                }
            },
            div { style: "display:flex; align-items:center; justify-content:space-between; gap:10px; margin-bottom:14px;",
                h2 { id: "prediction-text", style: "margin:0; color:#ffd700;", "{result.headline}" }
                span { id: "confidence-tag", style: "background: rgba(0,0,0,0.25); color:#4dff88; border:1px solid rgba(77,255,136,0.3); padding:4px 10px; border-radius:16px; font-size:0.8em; font-weight:600;", "{result.confidence_tag}" }
            }
            for bar in result.bars.iter() {
                div { key: "{bar.id}", style: "margin:8px 0;",
                    div { style: "display:flex; justify-content:space-between; font-size:0.85em; margin-bottom:4px;",
                        span { "{bar.label}" }
                        span { class: "val", style: "opacity:0.85;", "{bar.value_text}" }
                    }
                    div { style: "height:10px; background:rgba(0,0,0,0.25); border-radius:5px; overflow:hidden;",
                        div { id: "bar-{bar.id}", style: "width:{bar.width}; height:100%; background:linear-gradient(90deg,#48ff9b,#20c997); border-radius:5px; transition:width 0.6s ease;" }
                    }
                }
            }
        }
    }
}
