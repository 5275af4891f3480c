//! Platform detection and the few browser/webview calls the site needs.
//!
//! Window metrics and root styles go through `document::eval`, which runs in
//! both the browser and the desktop webview.

use std::future::Future;

use dioxus::prelude::*;

use super::responsive::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

const VIEWPORT_WATCH_JS: &str = r#"
const report = () => dioxus.send({
    width: window.innerWidth,
    height: window.innerHeight,
    touch: ('ontouchstart' in window) || navigator.maxTouchPoints > 0,
});
report();
window.addEventListener('resize', report);
window.addEventListener('orientationchange', () => setTimeout(report, 100));
await new Promise(() => {});
"#;

/// Reports the current viewport, then every resize/orientation change, until
/// the webview channel closes.
pub async fn watch_viewport(mut on_reading: impl FnMut(Viewport)) {
    let mut eval = document::eval(VIEWPORT_WATCH_JS);
    loop {
        match eval.recv::<Viewport>().await {
            Ok(viewport) => on_reading(viewport),
            Err(err) => {
                tracing::debug!("viewport watcher stopped: {err:?}");
                break;
            }
        }
    }
}

const ESCAPE_WATCH_JS: &str = r#"
document.addEventListener('keydown', (event) => {
    if (event.key === 'Escape') {
        dioxus.send(true);
    }
});
await new Promise(() => {});
"#;

/// Calls `on_escape` for every Escape press anywhere on the page.
pub async fn watch_escape(mut on_escape: impl FnMut()) {
    let mut eval = document::eval(ESCAPE_WATCH_JS);
    while eval.recv::<bool>().await.is_ok() {
        on_escape();
    }
    tracing::debug!("escape watcher stopped");
}

/// Sets the root font size and the `--vh` custom property.
pub fn apply_root_metrics(font_size_px: Option<u32>, vh_px: f64) {
    let mut script = format!(
        "document.documentElement.style.setProperty('--vh', '{vh_px:.2}px');"
    );
    if let Some(size) = font_size_px {
        script.push_str(&format!(
            "document.documentElement.style.fontSize = '{size}px';"
        ));
    }
    let _ = document::eval(&script);
}

/// Mirrors the selected language on `<html lang>`.
pub fn set_document_language(code: &str) {
    let _ = document::eval(&format!("document.documentElement.lang = '{code}';"));
}

/// Locks page scrolling behind overlays.
pub fn set_page_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}

/// Runs `fut` to completion even if the spawning component unmounts.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    let _ = spawn_forever(fut);
}
