use crate::components::site_footer::FooterAnchors;
use crate::core::menus::{Menu, MenuState, UserAction};
use crate::core::storage;
use crate::i18n::Language;
use crate::t;
use dioxus::prelude::*;

/// Destinations the shared UI can send the visitor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    LogIn,
    Register,
}

/// Platform-supplied routing, provided as context by each platform crate so
/// `ui` never names a platform's `Route` enum.
///
/// Each builder returns a fully constructed `Link` carrying the given class
/// and label:
/// ```ignore
/// use_context_provider(|| SiteLinks {
///     home: |class, label| rsx!( Link { class: "{class}", to: Route::Home {}, "{label}" } ),
///     log_in: |class, label| rsx!( Link { class: "{class}", to: Route::LogIn {}, "{label}" } ),
///     register: |class, label| rsx!( Link { class: "{class}", to: Route::Register {}, "{label}" } ),
///     navigate: |page| { navigator().push(Route::from(page)); },
/// });
/// ```
#[derive(Clone, Copy)]
pub struct SiteLinks {
    pub home: fn(class: &str, label: &str) -> Element,
    pub log_in: fn(class: &str, label: &str) -> Element,
    pub register: fn(class: &str, label: &str) -> Element,
    /// Programmatic navigation (menu entries, redirects after a form).
    pub navigate: fn(Page),
}

impl SiteLinks {
    pub fn link(&self, page: Page, class: &str, label: &str) -> Element {
        match page {
            Page::Home => (self.home)(class, label),
            Page::LogIn => (self.log_in)(class, label),
            Page::Register => (self.register)(class, label),
        }
    }
}

/// Without registered links (previews, tests) anchors fall back to plain text.
pub fn site_link(page: Page, class: &str, label: &str) -> Element {
    match try_consume_context::<SiteLinks>() {
        Some(links) => links.link(page, class, label),
        None => rsx!(span { class: "{class}", "{label}" }),
    }
}

fn language_name(lang: Language, option: Language) -> String {
    match option {
        Language::Es => t!(lang, "lang-name-es"),
        Language::En => t!(lang, "lang-name-en"),
    }
}

fn dropdown_class(open: bool) -> &'static str {
    if open {
        "dropdown dropdown--open"
    } else {
        "dropdown"
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let mut language = use_context::<Signal<Language>>();
    let mut menus = use_context::<Signal<MenuState>>();
    let links = try_use_context::<SiteLinks>();
    let anchors = use_context::<FooterAnchors>();

    let lang = language();
    let state: MenuState = menus();
    let language_open = state.is_open(Menu::Language);
    let user_open = state.is_open(Menu::User);

    let mut choose_language = move |next: Language| {
        menus.write().close_all();
        if next == *language.peek() {
            return;
        }
        language.set(next);
        tracing::info!("language switched to `{next}`");
        if let Err(err) = storage::save_language(next) {
            tracing::warn!("could not persist language `{next}`: {err}");
        }
    };

    let mut run_action = move |action: UserAction| {
        menus.write().close_all();
        if let Some(section) = action.footer_section() {
            anchors.reveal(section);
            return;
        }
        let page = match action {
            UserAction::Register => Page::Register,
            _ => Page::LogIn,
        };
        match links {
            Some(links) => (links.navigate)(page),
            None => tracing::warn!("no site links registered; cannot open {page:?}"),
        }
    };

    let brand = site_link(Page::Home, "site-header__brand-link", "Nos Fuimos de Finca");
    let user_actions = [
        (UserAction::Login, t!(lang, "menu-login")),
        (UserAction::Register, t!(lang, "menu-register")),
        (UserAction::Help, t!(lang, "menu-help")),
        (UserAction::Contact, t!(lang, "menu-contact")),
    ];

    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-spark", aria_hidden: "true" }
                    {brand}
                    span { class: "site-header__tagline", {t!(lang, "tagline")} }
                }

                div { class: "site-header__actions",
                    // Language picker
                    div { class: dropdown_class(language_open),
                        button {
                            class: "dropdown__toggle",
                            r#type: "button",
                            aria_label: t!(lang, "nav-language-label"),
                            aria_expanded: "{language_open}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                menus.write().toggle(Menu::Language);
                            },
                            span { class: "dropdown__badge", "{lang.badge()}" }
                        }
                        if language_open {
                            ul {
                                class: "dropdown__menu",
                                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                for option in Language::ALL {
                                    li { key: "{option}",
                                        button {
                                            r#type: "button",
                                            class: if option == lang { "dropdown__item dropdown__item--active" } else { "dropdown__item" },
                                            onclick: move |_| choose_language(option),
                                            span { class: "dropdown__badge", "{option.badge()}" }
                                            span { {language_name(lang, option)} }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // User menu
                    div { class: dropdown_class(user_open),
                        button {
                            class: "dropdown__toggle dropdown__toggle--user",
                            r#type: "button",
                            aria_label: t!(lang, "nav-user-menu-label"),
                            aria_expanded: "{user_open}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                menus.write().toggle(Menu::User);
                            },
                            span { class: "dropdown__icon", aria_hidden: "true", "☰" }
                            span { class: "dropdown__avatar", aria_hidden: "true" }
                        }
                        if user_open {
                            ul {
                                class: "dropdown__menu",
                                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                for (action, label) in user_actions {
                                    li { key: "{label}",
                                        button {
                                            r#type: "button",
                                            class: "dropdown__item",
                                            onclick: move |_| run_action(action),
                                            span { "{label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
