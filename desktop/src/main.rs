#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{Page, SiteLinks, SiteShell};
use ui::core::service::Services;
use ui::views::{Home, LogIn, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/log_in")]
    LogIn {},
    #[route("/register")]
    Register {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::LogIn => Route::LogIn {},
            Page::Register => Route::Register {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; the desktop crate ships no stylesheet of its own.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Nos Fuimos de Finca – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn link_log_in(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::LogIn {}, "{label}" })
}
fn link_register(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Register {}, "{label}" })
}

#[component]
fn App() -> Element {
    use_context_provider(|| SiteLinks {
        home: link_home,
        log_in: link_log_in,
        register: link_register,
        navigate: |page| {
            navigator().push(Route::from(page));
        },
    });
    use_context_provider(Services::default);

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared shell around the desktop-specific `Outlet`.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}
