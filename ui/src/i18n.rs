//! Internationalization (i18n) support for `finca-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading; Fluent formatting and plurals)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es/finca-ui.ftl   (fallback/reference)
//!   en/finca-ui.ftl
//! ```
//!
//! The site only speaks Spanish and English. Instead of switching one global
//! loader, each `Language` owns a loader and callers say which one they want:
//! ```ignore
//! let lang = use_context::<Signal<Language>>()();
//! let label = t!(lang, "menu-login");
//! let guests = t!(lang, "guests-adults", count = 2);
//! ```
//! Components read the language from context, so a language change re-renders
//! everything that displays text.
use std::fmt;
use std::str::FromStr;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro routed through the loader of an explicit `Language`.
/// Examples:
///     t!(lang, "menu-login")
///     t!(lang, "guests-adults", count = 3)
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "finca-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    /// Storage/`lang` attribute code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Header badge text (`ES` / `EN`).
    pub fn badge(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    fn identifier(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("language codes are valid identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code `{0}`")]
pub struct UnknownLanguage(pub String);

static SPANISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Es));
static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));

fn build_loader(language: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::default().identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[language.identifier()]) {
        tracing::warn!("[i18n] failed loading `{language}` ({err}); continuing with fallback");
    }
    // Plain strings: no bidi isolation marks around placeables. Only bundles
    // loaded by `select` are affected.
    loader.set_use_isolating(false);
    loader
}

/// Loader for `language`; built on first use.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::Es => &SPANISH,
        Language::En => &ENGLISH,
    }
}

/// List available (embedded) language codes.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_are_embedded() {
        assert_eq!(available_languages(), vec!["en", "es"]);
    }

    #[test]
    fn lookups_follow_the_requested_language() {
        assert_eq!(t!(Language::Es, "menu-login"), "Iniciar Sesión");
        assert_eq!(t!(Language::En, "menu-login"), "Login");
    }

    #[test]
    fn plural_guest_labels() {
        assert_eq!(t!(Language::Es, "guests-adults", count = 1), "1 adulto");
        assert_eq!(t!(Language::Es, "guests-adults", count = 3), "3 adultos");
        assert_eq!(t!(Language::En, "guests-children", count = 2), "2 children");
    }

    #[test]
    fn placeables_carry_no_isolation_marks() {
        for lang in Language::ALL {
            let label = t!(lang, "slider-go-to", index = 3);
            assert!(
                !label.contains(['\u{2068}', '\u{2069}']),
                "{lang}: {label:?}"
            );
            assert!(label.contains('3'));
        }
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Es);
    }
}
