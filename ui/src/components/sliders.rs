//! The three home page sliders, each a `Slider` with its own preset.

use dioxus::prelude::*;

use crate::catalog::{self, InfoTopic, FINCAS, MUNICIPIOS};
use crate::components::modal::Modal;
use crate::components::slider::Slider;
use crate::core::carousel::CarouselConfig;
use crate::i18n::Language;
use crate::t;

/// Featured fincas; clicking a card opens its details.
#[component]
pub fn FincaSlider() -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let mut selected = use_signal(|| None::<usize>);

    let detail = selected().and_then(|index| FINCAS.get(index)).copied();

    rsx! {
        section { class: "home-section home-section--fincas",
            h2 { class: "home-section__title", {t!(lang, "fincas-title")} }
            Slider {
                config: CarouselConfig::fincas(),
                count: FINCAS.len(),
                label: "fincas",
                render_slide: move |index: usize| {
                    let finca = FINCAS[index];
                    let price = catalog::format_cop(finca.nightly_price_cop);
                    rsx! {
                        article {
                            class: "card",
                            onclick: move |_| selected.set(Some(index)),
                            div {
                                class: "card__image",
                                style: "--card-hue: {finca.hue};",
                            }
                            div { class: "card__body",
                                h3 { class: "card__title", "{finca.name}" }
                                p { class: "card__location", "{finca.location}" }
                                p { class: "card__meta",
                                    {t!(lang, "finca-capacity", count = finca.capacity)}
                                }
                                p { class: "card__price",
                                    {t!(lang, "finca-price", price = price)}
                                }
                                span { class: "card__cta", {t!(lang, "finca-details")} }
                            }
                        }
                    }
                },
            }
            if let Some(finca) = detail {
                Modal {
                    title: finca.name.to_string(),
                    on_close: move |_| selected.set(None),
                    p { class: "card-info__location", "{finca.location}" }
                    p { class: "card-info__description", "{finca.description}" }
                    p { class: "card-info__meta",
                        {t!(lang, "finca-capacity", count = finca.capacity)}
                        " · "
                        {t!(lang, "finca-price", price = catalog::format_cop(finca.nightly_price_cop))}
                    }
                }
            }
        }
    }
}

#[component]
pub fn InfoSlider() -> Element {
    let lang: Language = use_context::<Signal<Language>>()();

    rsx! {
        section { class: "home-section home-section--info",
            h2 { class: "home-section__title", {t!(lang, "info-title")} }
            Slider {
                config: CarouselConfig::information(),
                count: InfoTopic::ALL.len(),
                label: "information",
                show_indicators: true,
                class: "slider--info",
                render_slide: move |index: usize| {
                    let topic = InfoTopic::ALL[index];
                    rsx! {
                        article { class: "info-card",
                            h3 { class: "info-card__title", {topic.title(lang)} }
                            p { class: "info-card__body", {topic.body(lang)} }
                        }
                    }
                },
            }
        }
    }
}

/// Rotating deck of towns; advances on its own every few seconds.
#[component]
pub fn MunicipiosSlider() -> Element {
    let lang: Language = use_context::<Signal<Language>>()();

    rsx! {
        section { id: "slider-municipios", class: "home-section home-section--municipios",
            h2 { class: "home-section__title", {t!(lang, "municipios-title")} }
            Slider {
                config: CarouselConfig::municipios(),
                count: MUNICIPIOS.len(),
                label: "municipios",
                class: "slider--municipios",
                render_slide: move |index: usize| {
                    let municipio = MUNICIPIOS[index];
                    let temp = municipio.average_temp_c.to_string();
                    rsx! {
                        div { class: "item", style: "--card-hue: {municipio.hue};",
                            div { class: "item__content",
                                h3 { class: "item__name", "{municipio.name}" }
                                p { class: "item__department", "{municipio.department}" }
                                p { class: "item__weather", {t!(lang, "municipio-weather", temp = temp)} }
                            }
                        }
                    }
                },
            }
        }
    }
}
