use dioxus::prelude::*;

use crate::components::site_shell::dismiss_menus;
use crate::core::guests::{GuestCounts, GuestKind};
use crate::core::menus::MenuState;
use crate::i18n::Language;
use crate::t;

#[component]
pub fn GuestCounter(mut guests: Signal<GuestCounts>) -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let menus = use_context::<Signal<MenuState>>();
    let counts = guests();

    let rows = [
        (
            GuestKind::Adults,
            t!(lang, "guests-adults-title"),
            t!(lang, "guests-adults-hint"),
        ),
        (
            GuestKind::Children,
            t!(lang, "guests-children-title"),
            t!(lang, "guests-children-hint"),
        ),
    ];

    rsx! {
        div {
            class: "guest-dropdown active",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                dismiss_menus(menus);
            },
            for (kind, title, hint) in rows {
                div { key: "{title}", class: "guest-row",
                    div { class: "guest-row__label",
                        span { class: "guest-row__title", "{title}" }
                        span { class: "guest-row__hint", "{hint}" }
                    }
                    div { class: "guest-row__counter",
                        button {
                            class: "counter-btn minus",
                            r#type: "button",
                            aria_label: t!(lang, "guests-decrement"),
                            disabled: !counts.can_decrement(kind),
                            onclick: move |_| {
                                guests.write().decrement(kind);
                            },
                            "−"
                        }
                        span { class: "counter-value", "{counts.get(kind)}" }
                        button {
                            class: "counter-btn plus",
                            r#type: "button",
                            aria_label: t!(lang, "guests-increment"),
                            disabled: !counts.can_increment(kind),
                            onclick: move |_| {
                                guests.write().increment(kind);
                            },
                            "+"
                        }
                    }
                }
            }
        }
    }
}
