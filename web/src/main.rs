use dioxus::prelude::*;

use ui::components::{Page, SiteLinks, SiteShell};
use ui::core::service::Services;
use ui::views::{Home, LogIn, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn link_log_in(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::LogIn {}, "{label}" })
}
fn link_register(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Register {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
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

    rsx! {
        Router::<Route> {}
    }
}

/// Web layout: the shared shell around the web-specific `Outlet`.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}
