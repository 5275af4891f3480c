use dioxus::prelude::*;

use crate::components::calendar::CalendarPanel;
use crate::components::guest_counter::GuestCounter;
use crate::components::site_shell::dismiss_menus;
use crate::core::calendar::{CalendarKind, DateRangePicker};
use crate::core::guests::GuestCounts;
use crate::core::menus::MenuState;
use crate::core::search::{SearchForm, LOCATIONS};
use crate::core::service::Services;
use crate::core::timing;
use crate::i18n::Language;
use crate::messages;
use crate::t;

/// Field whose dropdown is showing. Only one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Location,
    Checkin,
    Checkout,
    Guests,
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Error(String),
    Done(String),
}

impl Notice {
    fn text(&self) -> &str {
        match self {
            Notice::Error(text) | Notice::Done(text) => text,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Error(_) => "search-notice search-notice--error",
            Notice::Done(_) => "search-notice search-notice--done",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            Notice::Error(_) => "alert",
            Notice::Done(_) => "status",
        }
    }
}

fn field_class(base: &str, active: bool) -> String {
    if active {
        format!("search-field {base} active")
    } else {
        format!("search-field {base}")
    }
}

#[component]
pub fn SearchBar() -> Element {
    let language = use_context::<Signal<Language>>();
    let services = use_context::<Services>();
    let menus = use_context::<Signal<MenuState>>();
    let lang = language();

    let mut location = use_signal(String::new);
    let picker = use_signal(|| DateRangePicker::new(timing::today()));
    let guests = use_signal(GuestCounts::default);
    let mut with_pets = use_signal(|| false);
    let mut open = use_signal(|| None::<Panel>);
    let mut searching = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let current = open();
    let range = *picker.read().range();
    let checkin_text = range
        .checkin()
        .map(|date| messages::short_date(lang, date))
        .unwrap_or_else(|| t!(lang, "search-add-date"));
    let checkout_text = range
        .checkout()
        .map(|date| messages::short_date(lang, date))
        .unwrap_or_else(|| t!(lang, "search-add-date"));
    let guest_text = messages::guest_summary(lang, guests());

    let typed = location().to_lowercase();
    let options: Vec<&'static str> = LOCATIONS
        .iter()
        .copied()
        .filter(|option| typed.is_empty() || option.to_lowercase().contains(&typed))
        .collect();

    let mut show = move |panel: Panel| open.set(Some(panel));

    let submit = move |_: MouseEvent| {
        open.set(None);
        let form = SearchForm {
            location: location(),
            range: *picker.read().range(),
            guests: guests(),
            with_pets: with_pets(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("search rejected: {err}");
                notice.set(Some(Notice::Error(messages::search_error(
                    *language.peek(),
                    err,
                ))));
                return;
            }
        };
        match serde_json::to_string(&request) {
            Ok(json) => tracing::info!("searching with {json}"),
            Err(err) => tracing::warn!("could not serialise search request: {err}"),
        }

        notice.set(None);
        searching.set(true);
        let pending = services.booking().search(request);
        spawn(async move {
            let outcome = pending.await;
            searching.set(false);
            let lang = *language.peek();
            let text = match outcome {
                Ok(outcome) => Notice::Done(t!(lang, "search-done", count = outcome.farms_found)),
                Err(err) => Notice::Error(messages::service_error(lang, &err)),
            };
            notice.set(Some(text));
        });
    };

    rsx! {
        div { class: "search-bar-wrapper",
            if current.is_some() {
                div { class: "search-bar__backdrop", onclick: move |_| open.set(None) }
            }

            div { class: "search-bar",
                // Location
                div {
                    class: field_class("location-field", current == Some(Panel::Location)),
                    onclick: move |_| show(Panel::Location),
                    label { class: "search-field__label", r#for: "search-location",
                        {t!(lang, "search-location-label")}
                    }
                    input {
                        id: "search-location",
                        class: "location",
                        r#type: "text",
                        autocomplete: "off",
                        placeholder: t!(lang, "search-placeholder"),
                        value: "{location}",
                        onfocus: move |_| show(Panel::Location),
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                    if current == Some(Panel::Location) && !options.is_empty() {
                        ul { class: "dropdown active",
                            for option in options {
                                li {
                                    key: "{option}",
                                    class: "option",
                                    onclick: move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        dismiss_menus(menus);
                                        location.set(option.to_string());
                                        open.set(None);
                                    },
                                    "{option}"
                                }
                            }
                        }
                    }
                }

                // Check-in
                div {
                    class: field_class("checkin-field", current == Some(Panel::Checkin)),
                    onclick: move |_| show(Panel::Checkin),
                    span { class: "search-field__label", {t!(lang, "search-checkin-label")} }
                    span { class: "search-field__value", "{checkin_text}" }
                    if current == Some(Panel::Checkin) {
                        CalendarPanel {
                            picker,
                            kind: CalendarKind::Checkin,
                            on_picked: move |_| open.set(None),
                        }
                    }
                }

                // Check-out
                div {
                    class: field_class("checkout-field", current == Some(Panel::Checkout)),
                    onclick: move |_| show(Panel::Checkout),
                    span { class: "search-field__label", {t!(lang, "search-checkout-label")} }
                    span { class: "search-field__value", "{checkout_text}" }
                    if current == Some(Panel::Checkout) {
                        CalendarPanel {
                            picker,
                            kind: CalendarKind::Checkout,
                            on_picked: move |_| open.set(None),
                        }
                    }
                }

                // Guests
                div {
                    class: field_class("guest-field", current == Some(Panel::Guests)),
                    onclick: move |_| show(Panel::Guests),
                    span { class: "search-field__label", {t!(lang, "search-guests-label")} }
                    span { class: "search-field__value", "{guest_text}" }
                    if current == Some(Panel::Guests) {
                        GuestCounter { guests }
                    }
                }

                button {
                    class: "search-btn",
                    r#type: "button",
                    disabled: searching(),
                    onclick: submit,
                    if searching() {
                        span { class: "search-btn__spinner", aria_hidden: "true" }
                        span { {t!(lang, "search-searching")} }
                    } else {
                        span { {t!(lang, "search-button")} }
                    }
                }
            }

            label { class: "search-pets",
                input {
                    r#type: "checkbox",
                    checked: with_pets(),
                    onchange: move |_| with_pets.set(!with_pets()),
                }
                span { {t!(lang, "search-pets")} }
            }

            if let Some(current_notice) = notice() {
                div { class: current_notice.class(), role: current_notice.role(),
                    span { "{current_notice.text()}" }
                    button {
                        class: "search-notice__close",
                        r#type: "button",
                        aria_label: t!(lang, "notice-close"),
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }
        }
    }
}
