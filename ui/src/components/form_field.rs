use dioxus::prelude::*;

use crate::core::validation::FieldValidity;
use crate::i18n::Language;
use crate::t;

fn group_class(value: &str, validity: FieldValidity, focused: bool) -> String {
    let mut class = String::from("form-group");
    // Floating label: raised while focused or filled.
    if focused || !value.is_empty() {
        class.push_str(" focused");
    }
    let state = validity.css_class();
    if !state.is_empty() {
        class.push(' ');
        class.push_str(state);
    }
    class
}

/// Labelled text input bound to `value`. `format`, when given, rewrites the
/// raw input before it is stored (phone numbers).
#[component]
pub fn FormField(
    id: &'static str,
    label: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "off")] autocomplete: &'static str,
    mut value: Signal<String>,
    #[props(default)] validity: FieldValidity,
    #[props(default)] hint: Option<String>,
    #[props(default)] format: Option<fn(&str) -> String>,
    #[props(default)] on_blur: Option<EventHandler<()>>,
) -> Element {
    let mut focused = use_signal(|| false);
    let current = value();

    rsx! {
        div { class: group_class(&current, validity, focused()),
            input {
                id,
                r#type: input_type,
                class: "form-control",
                autocomplete,
                value: "{current}",
                onfocus: move |_| focused.set(true),
                onblur: move |_| {
                    focused.set(false);
                    if let Some(on_blur) = on_blur {
                        on_blur.call(());
                    }
                },
                oninput: move |evt: FormEvent| {
                    let raw = evt.value();
                    value.set(match format {
                        Some(format) => format(&raw),
                        None => raw,
                    });
                },
            }
            label { r#for: id, "{label}" }
            if let Some(hint) = hint {
                small { class: "form-hint", "{hint}" }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: String,
    mut value: Signal<String>,
    #[props(default)] validity: FieldValidity,
    #[props(default = "current-password")] autocomplete: &'static str,
    #[props(default)] on_blur: Option<EventHandler<()>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let mut visible = use_signal(|| false);
    let mut focused = use_signal(|| false);
    let current = value();
    let shown = visible();

    rsx! {
        div { class: group_class(&current, validity, focused()),
            div { class: "password-input",
                input {
                    id,
                    r#type: if shown { "text" } else { "password" },
                    class: "form-control",
                    autocomplete,
                    value: "{current}",
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| {
                        focused.set(false);
                        if let Some(on_blur) = on_blur {
                            on_blur.call(());
                        }
                    },
                    oninput: move |evt: FormEvent| value.set(evt.value()),
                }
                label { r#for: id, "{label}" }
                button {
                    class: "password-toggle",
                    r#type: "button",
                    aria_label: if shown { t!(lang, "form-hide-password") } else { t!(lang, "form-show-password") },
                    onclick: move |_| visible.set(!shown),
                    if shown { "🙈" } else { "👁" }
                }
            }
            {children}
        }
    }
}
