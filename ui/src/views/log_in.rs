use dioxus::prelude::*;

use crate::components::form_field::{FormField, PasswordField};
use crate::components::modal::Modal;
use crate::components::site_header::{site_link, Page, SiteLinks};
use crate::core::service::{Credentials, Services};
use crate::core::validation::LoginForm;
use crate::i18n::Language;
use crate::messages;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Editing,
    Rejected(String),
    Welcome,
}

#[component]
pub fn LogIn() -> Element {
    let language = use_context::<Signal<Language>>();
    let services = use_context::<Services>();
    let links = try_use_context::<SiteLinks>();
    let lang = language();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut status = use_signal(|| Status::Editing);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        if let Err(err) = form.validate() {
            status.set(Status::Rejected(messages::login_error(*language.peek(), err)));
            return;
        }

        tracing::info!("logging in");
        status.set(Status::Welcome);
        let pending = services.booking().log_in(Credentials {
            email: form.email.trim().to_string(),
            password: form.password,
        });
        spawn(async move {
            match pending.await {
                Ok(()) => match links {
                    Some(links) => (links.navigate)(Page::Home),
                    None => tracing::warn!("no site links registered; staying on login"),
                },
                Err(err) => {
                    let text = messages::service_error(*language.peek(), &err);
                    status.set(Status::Rejected(text));
                }
            }
        });
    };

    let current = status();

    rsx! {
        section { class: "page auth-page",
            div { class: "auth-card",
                h1 { class: "auth-card__title", {t!(lang, "login-title")} }
                p { class: "auth-card__subtitle", {t!(lang, "login-subtitle")} }

                if let Status::Rejected(message) = &current {
                    div { class: "alert alert--error", role: "alert", "{message}" }
                }

                form { class: "auth-form", novalidate: true, onsubmit: submit,
                    FormField {
                        id: "email",
                        label: t!(lang, "form-email"),
                        input_type: "email",
                        autocomplete: "email",
                        value: email,
                    }
                    PasswordField {
                        id: "password",
                        label: t!(lang, "form-password"),
                        value: password,
                    }
                    button { class: "button button--primary", r#type: "submit",
                        {t!(lang, "login-submit")}
                    }
                }

                p { class: "auth-card__switch",
                    {t!(lang, "login-register-prompt")}
                    " "
                    {site_link(Page::Register, "auth-card__link", &t!(lang, "login-register-link"))}
                }
                p { class: "auth-card__back",
                    {site_link(Page::Home, "auth-card__link", &t!(lang, "back-home"))}
                }
            }

            if current == Status::Welcome {
                Modal {
                    title: t!(lang, "login-success-title"),
                    on_close: move |_| status.set(Status::Editing),
                    p { {t!(lang, "login-success-body")} }
                }
            }
        }
    }
}
