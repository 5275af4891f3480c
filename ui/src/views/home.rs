use dioxus::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::sliders::{FincaSlider, InfoSlider, MunicipiosSlider};
use crate::i18n::Language;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the language signal so the hero re-renders on change.
    let lang: Language = use_context::<Signal<Language>>()();

    tracing::trace!("home render (lang={lang})");

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", {t!(lang, "home-title")} }
                p { class: "hero__subtitle", {t!(lang, "home-subtitle")} }
                SearchBar {}
            }
            FincaSlider {}
            InfoSlider {}
            MunicipiosSlider {}
        }
    }
}
