use dioxus::prelude::*;

use crate::components::form_field::{FormField, PasswordField};
use crate::components::modal::Modal;
use crate::components::site_header::{site_link, Page, SiteLinks};
use crate::core::service::{NewAccount, Services};
use crate::core::validation::{
    confirmation_validity, format_phone_input, validate_email, validate_phone, FieldValidity,
    RegistrationField, RegistrationForm, RegistrationReport, StrengthTier,
};
use crate::i18n::Language;
use crate::messages;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Rejected(String),
    Registered,
}

/// Submit errors win over the blur/live state of a field.
fn merged(report: &RegistrationReport, field: RegistrationField, live: FieldValidity) -> FieldValidity {
    if report.is_invalid(field) {
        FieldValidity::Invalid
    } else {
        live
    }
}

#[component]
pub fn Register() -> Element {
    let language = use_context::<Signal<Language>>();
    let services = use_context::<Services>();
    let links = try_use_context::<SiteLinks>();
    let lang = language();

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm = use_signal(String::new);
    let mut terms = use_signal(|| false);

    let mut email_state = use_signal(FieldValidity::default);
    let mut phone_state = use_signal(FieldValidity::default);
    let mut report = use_signal(RegistrationReport::default);
    let mut outcome = use_signal(|| None::<Outcome>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegistrationForm {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone: phone(),
            password: password(),
            confirm_password: confirm(),
            terms_accepted: terms(),
        };
        let checked = form.validate();
        let first_error = checked.first_error();
        report.set(checked);

        if let Some(err) = first_error {
            tracing::debug!("registration rejected: {err}");
            outcome.set(Some(Outcome::Rejected(messages::registration_error(
                *language.peek(),
                err,
            ))));
            return;
        }

        tracing::info!("registering new account");
        outcome.set(Some(Outcome::Registered));
        let pending = services.booking().register(NewAccount {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
        });
        spawn(async move {
            match pending.await {
                Ok(()) => match links {
                    Some(links) => (links.navigate)(Page::LogIn),
                    None => tracing::warn!("no site links registered; staying on registration"),
                },
                Err(err) => {
                    let text = messages::service_error(*language.peek(), &err);
                    outcome.set(Some(Outcome::Rejected(text)));
                }
            }
        });
    };

    let checked = report();
    let password_value = password();
    let strength = StrengthTier::for_password(&password_value);
    let confirm_state = confirmation_validity(&password_value, &confirm());

    rsx! {
        section { class: "page auth-page",
            div { class: "auth-card auth-card--wide",
                h1 { class: "auth-card__title", {t!(lang, "register-title")} }
                p { class: "auth-card__subtitle", {t!(lang, "register-subtitle")} }

                form { class: "auth-form", novalidate: true, onsubmit: submit,
                    div { class: "auth-form__row",
                        FormField {
                            id: "firstName",
                            label: t!(lang, "form-first-name"),
                            autocomplete: "given-name",
                            value: first_name,
                            validity: merged(&checked, RegistrationField::FirstName, FieldValidity::Unchecked),
                        }
                        FormField {
                            id: "lastName",
                            label: t!(lang, "form-last-name"),
                            autocomplete: "family-name",
                            value: last_name,
                            validity: merged(&checked, RegistrationField::LastName, FieldValidity::Unchecked),
                        }
                    }
                    FormField {
                        id: "email",
                        label: t!(lang, "form-email"),
                        input_type: "email",
                        autocomplete: "email",
                        value: email,
                        validity: merged(&checked, RegistrationField::Email, email_state()),
                        on_blur: move |_| email_state.set(FieldValidity::check(email.peek().trim(), validate_email)),
                    }
                    FormField {
                        id: "phone",
                        label: t!(lang, "form-phone"),
                        input_type: "tel",
                        autocomplete: "tel",
                        value: phone,
                        validity: merged(&checked, RegistrationField::Phone, phone_state()),
                        hint: t!(lang, "phone-hint"),
                        format: format_phone_input as fn(&str) -> String,
                        on_blur: move |_| phone_state.set(FieldValidity::check(phone.peek().trim(), validate_phone)),
                    }
                    PasswordField {
                        id: "password",
                        label: t!(lang, "form-password"),
                        autocomplete: "new-password",
                        value: password,
                        validity: merged(&checked, RegistrationField::Password, FieldValidity::Unchecked),
                        if let Some(tier) = strength {
                            div { class: tier.css_class(),
                                div { class: "password-strength__bar" }
                                span { class: "password-strength__label", {messages::strength_label(lang, tier)} }
                            }
                        }
                    }
                    PasswordField {
                        id: "confirmPassword",
                        label: t!(lang, "form-confirm-password"),
                        autocomplete: "new-password",
                        value: confirm,
                        validity: merged(&checked, RegistrationField::ConfirmPassword, confirm_state),
                    }
                    label {
                        class: if checked.is_invalid(RegistrationField::Terms) { "form-check is-invalid" } else { "form-check" },
                        input {
                            r#type: "checkbox",
                            checked: terms(),
                            onchange: move |_| terms.set(!terms()),
                        }
                        span { {t!(lang, "form-terms")} }
                    }
                    button { class: "button button--primary", r#type: "submit",
                        {t!(lang, "register-submit")}
                    }
                }

                p { class: "auth-card__switch",
                    {t!(lang, "register-login-prompt")}
                    " "
                    {site_link(Page::LogIn, "auth-card__link", &t!(lang, "register-login-link"))}
                }
                p { class: "auth-card__back",
                    {site_link(Page::Home, "auth-card__link", &t!(lang, "back-home"))}
                }
            }

            match outcome() {
                Some(Outcome::Registered) => rsx! {
                    Modal {
                        title: t!(lang, "register-success-title"),
                        on_close: move |_| outcome.set(None),
                        p { {t!(lang, "register-success-body")} }
                    }
                },
                Some(Outcome::Rejected(message)) => rsx! {
                    Modal {
                        title: t!(lang, "register-error-title"),
                        on_close: move |_| outcome.set(None),
                        p { id: "errorMessage", "{message}" }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
