// gui/components/model_picker.rs
use crate::analysis::ModelId;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ModelPickerProps {
    pub selected: ModelId,
    pub disabled: bool,
    pub on_select: EventHandler<ModelId>,
}

/// Exclusive model choice; one option is always checked.
#[component]
pub fn ModelPicker(props: ModelPickerProps) -> Element {
    let on_select = props.on_select;
    rsx! {
        div { style: "background: rgba(255,255,255,0.1); padding:12px 16px; border-radius:12px; border:1px solid rgba(255,255,255,0.2);",
            h3 { style: "margin:0 0 8px 0; font-size:0.85em; letter-spacing:0.5px; opacity:0.85;", "🧪 Model" }
            div { style: "display:flex; gap:14px; flex-wrap:wrap;",
                for model in ModelId::ALL {
                    label { key: "{model}", style: "display:flex; align-items:center; gap:6px; font-size:0.9em; cursor:pointer; user-select:none;",
                        input {
                            r#type: "radio",
                            name: "model",
                            value: "{model}",
                            checked: props.selected == model,
                            disabled: props.disabled,
                            onchange: move |_| on_select.call(model),
                            style: "width:16px; height:16px; cursor:pointer;"
                        }
                        {model.label().to_string()}
                    }
                }
            }
        }
    }
}
