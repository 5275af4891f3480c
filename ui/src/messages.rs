//! Localized text for domain values: error enums, guest summaries, dates.
//!
//! The error enums carry Spanish `Display` text for logs; anything shown to
//! a visitor goes through these helpers so it follows the selected language.

use time::{Date, Month, Weekday};

use crate::core::calendar::{MonthCursor, RangeError};
use crate::core::guests::GuestCounts;
use crate::core::search::SearchError;
use crate::core::service::ServiceError;
use crate::core::validation::{LoginError, RegistrationError, StrengthTier};
use crate::i18n::Language;
use crate::t;

pub fn registration_error(lang: Language, error: RegistrationError) -> String {
    match error {
        RegistrationError::FirstNameRequired => t!(lang, "error-first-name-required"),
        RegistrationError::LastNameRequired => t!(lang, "error-last-name-required"),
        RegistrationError::EmailRequired => t!(lang, "error-email-required"),
        RegistrationError::EmailInvalid => t!(lang, "error-email-invalid"),
        RegistrationError::PhoneRequired => t!(lang, "error-phone-required"),
        RegistrationError::PhoneInvalid => t!(lang, "error-phone-invalid"),
        RegistrationError::PasswordRequired => t!(lang, "error-password-required"),
        RegistrationError::PasswordTooShort => t!(lang, "error-password-short"),
        RegistrationError::ConfirmRequired => t!(lang, "error-confirm-required"),
        RegistrationError::PasswordMismatch => t!(lang, "error-confirm-mismatch"),
        RegistrationError::TermsNotAccepted => t!(lang, "error-terms"),
    }
}

pub fn login_error(lang: Language, error: LoginError) -> String {
    match error {
        LoginError::MissingFields => t!(lang, "login-error-required"),
    }
}

pub fn search_error(lang: Language, error: SearchError) -> String {
    match error {
        SearchError::MissingLocation => t!(lang, "search-error-location"),
        SearchError::MissingDates => t!(lang, "search-error-dates"),
        SearchError::CheckoutNotAfterCheckin => t!(lang, "search-error-order"),
    }
}

/// Picking a checkout on or before checkin is reported like a bad search.
pub fn range_error(lang: Language, error: RangeError) -> String {
    match error {
        RangeError::NotAfterCheckin => t!(lang, "search-error-order"),
        RangeError::InPast => t!(lang, "search-error-dates"),
    }
}

pub fn service_error(lang: Language, error: &ServiceError) -> String {
    tracing::warn!("booking service failed: {error}");
    t!(lang, "service-error")
}

pub fn strength_label(lang: Language, tier: StrengthTier) -> String {
    match tier {
        StrengthTier::Weak => t!(lang, "strength-weak"),
        StrengthTier::Medium => t!(lang, "strength-medium"),
        StrengthTier::Strong => t!(lang, "strength-strong"),
    }
}

/// "2 adultos" or "2 adultos · 1 niño"; zero counts are left out and an
/// empty party falls back to the field placeholder.
pub fn guest_summary(lang: Language, guests: GuestCounts) -> String {
    let mut parts = Vec::with_capacity(2);
    if guests.adults > 0 {
        parts.push(t!(lang, "guests-adults", count = guests.adults));
    }
    if guests.children > 0 {
        parts.push(t!(lang, "guests-children", count = guests.children));
    }
    if parts.is_empty() {
        t!(lang, "guests-placeholder")
    } else {
        parts.join(" · ")
    }
}

pub fn month_name(lang: Language, month: Month) -> String {
    match month {
        Month::January => t!(lang, "month-january"),
        Month::February => t!(lang, "month-february"),
        Month::March => t!(lang, "month-march"),
        Month::April => t!(lang, "month-april"),
        Month::May => t!(lang, "month-may"),
        Month::June => t!(lang, "month-june"),
        Month::July => t!(lang, "month-july"),
        Month::August => t!(lang, "month-august"),
        Month::September => t!(lang, "month-september"),
        Month::October => t!(lang, "month-october"),
        Month::November => t!(lang, "month-november"),
        Month::December => t!(lang, "month-december"),
    }
}

pub fn month_short(lang: Language, month: Month) -> String {
    match month {
        Month::January => t!(lang, "month-short-january"),
        Month::February => t!(lang, "month-short-february"),
        Month::March => t!(lang, "month-short-march"),
        Month::April => t!(lang, "month-short-april"),
        Month::May => t!(lang, "month-short-may"),
        Month::June => t!(lang, "month-short-june"),
        Month::July => t!(lang, "month-short-july"),
        Month::August => t!(lang, "month-short-august"),
        Month::September => t!(lang, "month-short-september"),
        Month::October => t!(lang, "month-short-october"),
        Month::November => t!(lang, "month-short-november"),
        Month::December => t!(lang, "month-short-december"),
    }
}

pub fn weekday_short(lang: Language, day: Weekday) -> String {
    match day {
        Weekday::Sunday => t!(lang, "weekday-sun"),
        Weekday::Monday => t!(lang, "weekday-mon"),
        Weekday::Tuesday => t!(lang, "weekday-tue"),
        Weekday::Wednesday => t!(lang, "weekday-wed"),
        Weekday::Thursday => t!(lang, "weekday-thu"),
        Weekday::Friday => t!(lang, "weekday-fri"),
        Weekday::Saturday => t!(lang, "weekday-sat"),
    }
}

/// Column headers, Sunday first like the grids.
pub fn weekday_headers(lang: Language) -> Vec<String> {
    let mut day = Weekday::Sunday;
    let mut headers = Vec::with_capacity(7);
    for _ in 0..7 {
        headers.push(weekday_short(lang, day));
        day = day.next();
    }
    headers
}

/// "Marzo 2024" / "March 2024". Numbers go in as text so Fluent does not
/// group the digits.
pub fn calendar_title(lang: Language, cursor: MonthCursor) -> String {
    let month = month_name(lang, cursor.month);
    let year = cursor.year.to_string();
    t!(lang, "calendar-title", month = month, year = year)
}

/// Field display for a picked date: "10 mar" / "Mar 10".
pub fn short_date(lang: Language, date: Date) -> String {
    let month = month_short(lang, date.month());
    let day = date.day().to_string();
    t!(lang, "date-short", day = day, month = month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn registration_messages_follow_language() {
        assert_eq!(
            registration_error(Language::Es, RegistrationError::FirstNameRequired),
            "El nombre es obligatorio."
        );
        assert_eq!(
            registration_error(Language::En, RegistrationError::PasswordMismatch),
            "Passwords do not match."
        );
    }

    #[test]
    fn spanish_messages_match_error_display() {
        for error in [
            RegistrationError::FirstNameRequired,
            RegistrationError::EmailInvalid,
            RegistrationError::PhoneInvalid,
            RegistrationError::TermsNotAccepted,
        ] {
            assert_eq!(registration_error(Language::Es, error), error.to_string());
        }
        for error in [
            SearchError::MissingLocation,
            SearchError::MissingDates,
            SearchError::CheckoutNotAfterCheckin,
        ] {
            assert_eq!(search_error(Language::Es, error), error.to_string());
        }
        assert_eq!(
            login_error(Language::Es, LoginError::MissingFields),
            LoginError::MissingFields.to_string()
        );
    }

    #[test]
    fn guest_summary_skips_zero_counts() {
        assert_eq!(guest_summary(Language::Es, GuestCounts::new(2, 0)), "2 adultos");
        assert_eq!(
            guest_summary(Language::Es, GuestCounts::new(1, 1)),
            "1 adulto · 1 niño"
        );
        assert_eq!(
            guest_summary(Language::En, GuestCounts::new(3, 2)),
            "3 adults · 2 children"
        );
        assert_eq!(guest_summary(Language::En, GuestCounts::new(0, 0)), "Guests");
    }

    #[test]
    fn dates_and_titles() {
        let cursor = MonthCursor::containing(date!(2024 - 03 - 10));
        assert_eq!(calendar_title(Language::Es, cursor), "Marzo 2024");
        assert_eq!(calendar_title(Language::En, cursor), "March 2024");
        assert_eq!(short_date(Language::Es, date!(2024 - 03 - 10)), "10 mar");
        assert_eq!(short_date(Language::En, date!(2024 - 03 - 10)), "Mar 10");
    }

    #[test]
    fn headers_start_on_sunday() {
        let headers = weekday_headers(Language::Es);
        assert_eq!(headers.len(), 7);
        assert_eq!(headers[0], "Do");
        assert_eq!(headers[6], "Sa");
    }
}
