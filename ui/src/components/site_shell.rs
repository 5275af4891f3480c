use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::site_footer::{FooterAnchors, SiteFooter};
use crate::components::site_header::SiteHeader;
use crate::core::menus::MenuState;
use crate::core::platform::{self, Platform};
use crate::core::responsive::{
    root_font_size_px, viewport_unit_px, Debouncer, Viewport, ZoomGuard, PAGE_RESIZE_DEBOUNCE_MS,
};
use crate::core::{storage, timing};
use crate::i18n::Language;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Closes whichever header menu is open. Click handlers that stop propagation
/// before the shell sees the click call this themselves.
pub fn dismiss_menus(mut menus: Signal<MenuState>) {
    let mut next = *menus.peek();
    if next.close_all() {
        menus.set(next);
    }
}

/// Stored preference, or Spanish when there is none or it cannot be read.
fn initial_language() -> Language {
    match storage::load_language() {
        Ok(Some(language)) => {
            if language != Language::default() {
                tracing::info!("restoring saved language `{language}`");
            }
            language
        }
        Ok(None) => Language::default(),
        Err(err) => {
            tracing::warn!("language preference unavailable: {err}");
            Language::default()
        }
    }
}

/// Page chrome shared by every route.
///
/// Provides the site-wide context the rest of the tree reads:
/// - `Signal<Language>`: selected language (restored from storage)
/// - `Signal<MenuState>`: header dropdowns; any click that reaches the shell
///   or an Escape press closes them
/// - `Signal<Viewport>`: debounced window size and touch support
/// - `FooterAnchors`: help/contact sections the user menu scrolls to
///
/// Platforms add `SiteLinks` and `Services` above this component.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let language = use_context_provider(|| Signal::new(initial_language()));
    let menus = use_context_provider(|| Signal::new(MenuState::default()));
    let mut viewport = use_context_provider(|| Signal::new(Viewport::default()));
    use_context_provider(FooterAnchors::new);

    let debouncer = use_hook(Debouncer::default);
    use_future(move || {
        let debouncer = debouncer.clone();
        async move {
            let mut first_reading = true;
            platform::watch_viewport(move |reading| {
                if first_reading {
                    first_reading = false;
                    viewport.set(reading);
                    return;
                }
                let ticket = debouncer.schedule();
                let debouncer = debouncer.clone();
                spawn(async move {
                    timing::sleep_ms(PAGE_RESIZE_DEBOUNCE_MS).await;
                    if debouncer.is_current(ticket) {
                        viewport.set(reading);
                    }
                });
            })
            .await;
        }
    });

    use_future(move || async move {
        platform::watch_escape(move || dismiss_menus(menus)).await;
    });

    let zoom = use_hook(|| Rc::new(Cell::new(ZoomGuard::default())));
    use_effect(move || {
        let reading = viewport();
        let mut guard = zoom.get();
        let font_size = guard
            .should_apply(reading.width)
            .then(|| root_font_size_px(reading.width));
        zoom.set(guard);
        platform::apply_root_metrics(font_size, viewport_unit_px(reading.height));
    });

    use_effect(move || {
        platform::set_document_language(language().code());
    });

    let site_class = if viewport().touch {
        "site touch-device"
    } else {
        "site"
    };
    let platform_name = match Platform::current() {
        Platform::Web => "web",
        Platform::Desktop => "desktop",
    };

    rsx! {
        if cfg!(target_arch = "wasm32") {
            document::Link { rel: "stylesheet", href: THEME_CSS }
        }

        div {
            class: "{site_class}",
            "data-platform": platform_name,
            onclick: move |_| dismiss_menus(menus),
            SiteHeader {}
            main { class: "site__main", {children} }
            SiteFooter {}
        }
    }
}
