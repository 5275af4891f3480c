use dioxus::prelude::*;

use crate::components::site_shell::dismiss_menus;
use crate::core::calendar::{CalendarKind, DateRangePicker};
use crate::core::menus::MenuState;
use crate::i18n::Language;
use crate::messages;
use crate::t;

/// One month grid of the date-range picker. Both panels share `picker`, so
/// picking a date re-renders the other grid's range highlighting too.
/// `on_picked` fires after a date was accepted.
#[component]
pub fn CalendarPanel(
    mut picker: Signal<DateRangePicker>,
    kind: CalendarKind,
    on_picked: EventHandler<CalendarKind>,
) -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let menus = use_context::<Signal<MenuState>>();
    let grid = picker.read().grid(kind);
    let title = messages::calendar_title(lang, grid.cursor);
    let headers = messages::weekday_headers(lang);
    let mut rejected = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "calendar-dropdown active",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                dismiss_menus(menus);
            },
            div { class: "calendar-header",
                button {
                    class: "calendar-nav",
                    r#type: "button",
                    aria_label: t!(lang, "calendar-prev-month"),
                    onclick: move |_| picker.write().page(kind, -1),
                    "‹"
                }
                span { class: "calendar-month", "{title}" }
                button {
                    class: "calendar-nav",
                    r#type: "button",
                    aria_label: t!(lang, "calendar-next-month"),
                    onclick: move |_| picker.write().page(kind, 1),
                    "›"
                }
            }
            div { class: "calendar-weekdays",
                for (column, header) in headers.into_iter().enumerate() {
                    span { key: "{column}", class: "calendar-weekday", "{header}" }
                }
            }
            div { class: "calendar-days",
                for cell in grid.cells {
                    button {
                        key: "{cell.date}",
                        r#type: "button",
                        class: cell.css_class(),
                        disabled: cell.disabled,
                        onclick: move |_| {
                            let picked = picker.write().select(kind, cell.date);
                            match picked {
                                Ok(()) => {
                                    rejected.set(None);
                                    on_picked.call(kind);
                                }
                                Err(err) => {
                                    tracing::debug!("ignored {} pick: {err}", cell.date);
                                    rejected.set(Some(messages::range_error(lang, err)));
                                }
                            }
                        },
                        "{cell.date.day()}"
                    }
                }
            }
            if let Some(message) = rejected() {
                p { class: "calendar-error", role: "alert", "{message}" }
            }
        }
    }
}
