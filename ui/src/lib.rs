//! Shared UI crate for Nos Fuimos de Finca. Cross-platform state, components
//! and pages live here; the `web` and `desktop` crates only add routing.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod messages;
pub mod views;

pub mod components {
    // Page chrome (header with dropdowns, footer anchors, shell with context)
    pub mod site_footer;
    pub mod site_header;
    pub mod site_shell;
    pub use site_footer::{FooterAnchors, SiteFooter};
    pub use site_header::{site_link, Page, SiteHeader, SiteLinks};
    pub use site_shell::SiteShell;

    // Carousel widget and its three home page presets
    pub mod slider;
    pub mod sliders;
    pub use slider::Slider;
    pub use sliders::{FincaSlider, InfoSlider, MunicipiosSlider};

    // Search bar and its dropdown panels
    pub mod calendar;
    pub mod guest_counter;
    pub mod search_bar;
    pub use calendar::CalendarPanel;
    pub use guest_counter::GuestCounter;
    pub use search_bar::SearchBar;

    pub mod form_field;
    pub mod modal;
    pub use modal::Modal;
}
