use dioxus::prelude::*;

use crate::core::platform;
use crate::i18n::Language;
use crate::t;

/// Centered dialog over a dimmed backdrop. Page scrolling is locked while it
/// is mounted; backdrop click, the close button and Escape all call `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let lang: Language = use_context::<Signal<Language>>()();

    use_hook(|| platform::set_page_scroll_locked(true));
    use_drop(|| platform::set_page_scroll_locked(false));

    rsx! {
        div { class: "modal-overlay active", onclick: move |_| on_close.call(()) }
        div {
            class: "modal active",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.data().set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            button {
                class: "modal__close",
                r#type: "button",
                aria_label: t!(lang, "slider-close"),
                onclick: move |_| on_close.call(()),
                "×"
            }
            h3 { class: "modal__title", "{title}" }
            div { class: "modal__body", {children} }
        }
    }
}
