#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present & non‑trivial.
//!
//! The desktop build embeds `ui/assets/theme/main.css` at compile time; a truncated
//! file or broken path would only show up as unstyled pages at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--vh", "body {", ".button--primary", ".site-header"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
