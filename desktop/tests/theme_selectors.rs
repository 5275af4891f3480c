#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared components emit (header dropdowns, sliders,
  search bar panels, auth forms) remain present in the shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, preventing a silent styling
  regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector, update the component markup
  and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".site__main",
    // Buttons
    ".button {",
    ".button--primary",
    // Header dropdowns
    ".site-header",
    ".dropdown__toggle",
    ".dropdown__menu",
    ".dropdown__item--active",
    // Search bar
    ".search-bar",
    ".search-field.active",
    ".search-btn__spinner",
    ".search-notice--error",
    // Date-range picker
    ".calendar-dropdown",
    ".calendar-day.disabled",
    ".calendar-day.in-range",
    ".calendar-day.range-start",
    // Guest counter
    ".guest-dropdown",
    ".counter-btn:disabled",
    // Sliders
    ".slider__track",
    ".slider__nav:disabled",
    ".slider__dot--active",
    ".card__image",
    ".info-card",
    ".item__content",
    // Modal
    ".modal-overlay",
    ".modal__close",
    // Forms
    ".form-group.focused",
    ".form-group.is-valid",
    ".form-group.is-invalid",
    ".password-strength.weak",
    ".password-strength.medium",
    ".password-strength.strong",
    // Footer highlight
    ".site-footer__section",
    ".section-highlight",
    // Touch devices
    ".touch-device",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn password_strength_tiers_are_paired() {
    let tiers = ["weak", "medium", "strong"];
    for tier in tiers {
        let selector = format!(".password-strength.{tier} .password-strength__bar");
        assert!(
            THEME_CSS.contains(&selector),
            "Strength tier `{tier}` has no bar styling"
        );
    }
}
