//! End-to-end flows through the public `ui` API: what the search bar, the
//! sliders and the registration page do with user input, minus the DOM.

use futures::executor::block_on;
use time::macros::date;

use ui::catalog::{FINCAS, MUNICIPIOS};
use ui::core::calendar::{CalendarKind, DateRangePicker, GRID_CELLS};
use ui::core::carousel::{Carousel, CarouselConfig, DragRelease};
use ui::core::guests::{GuestCounts, GuestKind, MAX_GUESTS};
use ui::core::menus::{Menu, MenuState, UserAction};
use ui::core::responsive::Debouncer;
use ui::core::search::{SearchError, SearchForm};
use ui::core::service::{NewAccount, Services, SimulatedService};
use ui::core::validation::{RegistrationError, RegistrationField, RegistrationForm};
use ui::core::SetupError;
use ui::i18n::Language;
use ui::messages;

#[test]
fn search_from_picked_dates_to_service_outcome() {
    let mut picker = DateRangePicker::new(date!(2024 - 03 - 12));
    picker
        .select(CalendarKind::Checkin, date!(2024 - 03 - 15))
        .unwrap();
    picker
        .select(CalendarKind::Checkout, date!(2024 - 03 - 20))
        .unwrap();

    let mut guests = GuestCounts::default();
    assert!(guests.increment(GuestKind::Children));

    let form = SearchForm {
        location: "Melgar, Tolima".into(),
        range: *picker.range(),
        guests,
        with_pets: true,
    };
    let request = form.to_request().unwrap();
    assert_eq!(request.guests, GuestCounts::new(2, 1));
    assert_eq!(picker.range().nights(), Some(5));

    let services = Services::new(SimulatedService::instant());
    let outcome = block_on(services.booking().search(request)).unwrap();
    assert_eq!(outcome.farms_found, 15);

    assert_eq!(
        messages::guest_summary(Language::Es, guests),
        "2 adultos · 1 niño"
    );
    assert_eq!(
        messages::guest_summary(Language::En, guests),
        "2 adults · 1 child"
    );
}

#[test]
fn both_grids_share_the_selected_range() {
    let mut picker = DateRangePicker::new(date!(2024 - 03 - 12));
    picker
        .select(CalendarKind::Checkin, date!(2024 - 03 - 15))
        .unwrap();
    picker
        .select(CalendarKind::Checkout, date!(2024 - 03 - 20))
        .unwrap();

    for kind in [CalendarKind::Checkin, CalendarKind::Checkout] {
        let grid = picker.grid(kind);
        assert_eq!(grid.cells.len(), GRID_CELLS);
        // March 2024 starts on a Friday; the grid opens on Sunday the 25th.
        assert_eq!(grid.cells[0].date, date!(2024 - 02 - 25));
        let nights_between: Vec<u8> = grid
            .cells
            .iter()
            .filter(|cell| cell.in_range)
            .map(|cell| cell.date.day())
            .collect();
        assert_eq!(nights_between, vec![16, 17, 18, 19]);
    }

    // Paging one calendar leaves the other where it was.
    picker.page(CalendarKind::Checkout, 1);
    assert_eq!(picker.grid(CalendarKind::Checkin).cursor.month, time::Month::March);
    assert_eq!(picker.grid(CalendarKind::Checkout).cursor.month, time::Month::April);
    assert!(picker
        .grid(CalendarKind::Checkout)
        .cells
        .iter()
        .all(|cell| !cell.in_range || !cell.in_month));
}

#[test]
fn later_checkin_drops_a_stale_checkout_and_search_asks_for_dates() {
    let mut picker = DateRangePicker::new(date!(2024 - 03 - 12));
    picker
        .select(CalendarKind::Checkin, date!(2024 - 03 - 15))
        .unwrap();
    picker
        .select(CalendarKind::Checkout, date!(2024 - 03 - 18))
        .unwrap();
    picker
        .select(CalendarKind::Checkin, date!(2024 - 03 - 25))
        .unwrap();
    assert_eq!(picker.range().checkout(), None);

    let form = SearchForm {
        location: "Girardot, Cundinamarca".into(),
        range: *picker.range(),
        ..SearchForm::default()
    };
    let err = form.to_request().unwrap_err();
    assert_eq!(err, SearchError::MissingDates);
    assert_eq!(
        messages::search_error(Language::En, err),
        "Please choose check-in and check-out dates"
    );
}

#[test]
fn guest_counter_respects_limits_in_any_order() {
    let mut guests = GuestCounts::new(1, 0);
    for _ in 0..30 {
        guests.increment(GuestKind::Children);
    }
    assert_eq!(guests.children, MAX_GUESTS);
    assert!(!guests.can_increment(GuestKind::Children));

    // The last adult cannot leave while children remain.
    assert!(!guests.decrement(GuestKind::Adults));
    while guests.decrement(GuestKind::Children) {}
    assert!(guests.decrement(GuestKind::Adults));
    assert_eq!(guests, GuestCounts::new(0, 0));
    assert_eq!(messages::guest_summary(Language::En, guests), "Guests");
}

#[test]
fn finca_slider_walks_and_swipes_within_bounds() {
    let mut carousel = Carousel::new(CarouselConfig::fincas(), FINCAS.len()).unwrap();
    carousel.resize(1300.0, 1264.0);
    assert_eq!(carousel.items_per_view(), 4);
    assert_eq!(carousel.indicator_count(), FINCAS.len() - 3);

    while carousel.next() {}
    assert_eq!(carousel.current_index(), carousel.max_index());
    assert!(!carousel.can_next());

    // Narrowing the window keeps the index reachable.
    carousel.resize(500.0, 460.0);
    assert_eq!(carousel.items_per_view(), 2);
    assert_eq!(carousel.current_index(), 4);

    carousel.begin_drag(300.0);
    carousel.drag_to(390.0);
    assert_eq!(carousel.end_drag(), DragRelease::Retreated);
    assert_eq!(carousel.current_index(), 3);

    carousel.begin_drag(300.0);
    carousel.drag_to(280.0);
    assert_eq!(carousel.end_drag(), DragRelease::SnappedBack);
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn quick_swipe_released_before_the_next_frame_still_advances() {
    let mut carousel = Carousel::new(CarouselConfig::information(), 6).unwrap();
    carousel.resize(1024.0, 1000.0);

    // mousedown at 400, mousemove to 280, mouseup: no frame tick in between.
    carousel.begin_drag(400.0);
    let last_pointer_x = 280.0;
    assert_eq!(carousel.release_at(last_pointer_x), DragRelease::Advanced);
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_dragging());
}

#[test]
fn slider_layout_follows_only_the_last_width_in_a_burst() {
    let mut carousel = Carousel::new(CarouselConfig::fincas(), FINCAS.len()).unwrap();
    carousel.resize(1300.0, 1264.0);
    let debouncer = Debouncer::default();

    // A viewport change and a container change land in the same window.
    let viewport_ticket = debouncer.schedule();
    let container_ticket = debouncer.schedule();
    let (viewport_width, container_width) = (800.0, 760.0);

    for ticket in [viewport_ticket, container_ticket] {
        if debouncer.is_current(ticket) {
            carousel.resize(viewport_width, container_width);
        }
    }
    assert!(!debouncer.is_current(viewport_ticket));
    assert_eq!(carousel.items_per_view(), 3);
}

#[test]
fn municipios_deck_rotates_in_both_directions() {
    let mut deck = Carousel::new(CarouselConfig::municipios(), MUNICIPIOS.len()).unwrap();
    assert!(deck.prev());
    assert_eq!(deck.current_index(), MUNICIPIOS.len() - 1);
    assert_eq!(deck.visible_order()[0], MUNICIPIOS.len() - 1);
    assert!(deck.next());
    assert!(deck.next());
    assert_eq!(deck.visible_order(), vec![1, 2, 3, 4, 0]);
}

#[test]
fn slider_without_slides_is_a_setup_error() {
    assert_eq!(
        Carousel::new(CarouselConfig::information(), 0),
        Err(SetupError::NoSlides)
    );
    let mut config = CarouselConfig::fincas();
    config.breakpoints.clear();
    assert_eq!(Carousel::new(config, 3), Err(SetupError::NoBreakpoints));
}

#[test]
fn registration_reports_first_problem_then_registers() {
    let mut form = RegistrationForm {
        first_name: "Ana".into(),
        last_name: " ".into(),
        email: "ana@".into(),
        phone: "+57 300 123 4567".into(),
        password: "Clave#2024".into(),
        confirm_password: "Clave#2025".into(),
        terms_accepted: false,
    };
    let report = form.validate();
    assert_eq!(
        report.first_error(),
        Some(RegistrationError::LastNameRequired)
    );
    assert!(report.is_invalid(RegistrationField::Email));
    assert!(report.is_invalid(RegistrationField::ConfirmPassword));
    assert!(report.is_invalid(RegistrationField::Terms));
    assert!(!report.is_invalid(RegistrationField::Phone));
    assert_eq!(
        messages::registration_error(Language::Es, RegistrationError::LastNameRequired),
        RegistrationError::LastNameRequired.to_string()
    );

    form.last_name = "Gómez".into();
    form.email = "ana@example.com".into();
    form.confirm_password = form.password.clone();
    form.terms_accepted = true;
    assert!(form.validate().is_valid());

    let services = Services::new(SimulatedService::instant());
    let registered = block_on(services.booking().register(NewAccount {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        phone: form.phone,
    }));
    assert!(registered.is_ok());
}

#[test]
fn header_menus_never_open_together() {
    let mut menus = MenuState::default();
    menus.toggle(Menu::Language);
    menus.toggle(Menu::User);
    assert!(menus.is_open(Menu::User));
    assert!(!menus.is_open(Menu::Language));

    assert!(menus.close_all());
    assert_eq!(menus.open_menu(), None);

    assert!(UserAction::Help.footer_section().is_some());
    assert!(UserAction::Login.footer_section().is_none());
}

#[test]
fn opening_a_search_panel_closes_the_user_menu() {
    let mut menus = MenuState::default();
    menus.toggle(Menu::User);

    // A click on a search field bubbles to the page; one inside an open
    // calendar or guest panel closes the menu directly. Both end here.
    assert!(menus.close_all());
    assert!(!menus.is_open(Menu::User));
    assert!(!menus.close_all());
}
