//! Search bar submission: turns the bar's state into a request or an error.

use serde::Serialize;
use thiserror::Error;
use time::Date;

use super::calendar::DateRange;
use super::guests::GuestCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Por favor, selecciona una ubicación")]
    MissingLocation,
    #[error("Por favor, selecciona las fechas de llegada y salida")]
    MissingDates,
    #[error("La fecha de salida debe ser posterior a la fecha de llegada")]
    CheckoutNotAfterCheckin,
}

/// Validated search, ready for the booking service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub location: String,
    pub checkin: Date,
    pub checkout: Date,
    pub guests: GuestCounts,
    pub with_pets: bool,
}

/// Destinations offered under the location field.
pub const LOCATIONS: &[&str] = &[
    "Anapoima, Cundinamarca",
    "Girardot, Cundinamarca",
    "La Mesa, Cundinamarca",
    "Villeta, Cundinamarca",
    "Melgar, Tolima",
    "Villa de Leyva, Boyacá",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    pub location: String,
    pub range: DateRange,
    pub guests: GuestCounts,
    pub with_pets: bool,
}

impl SearchForm {
    pub fn to_request(&self) -> Result<SearchRequest, SearchError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(SearchError::MissingLocation);
        }
        let (Some(checkin), Some(checkout)) = (self.range.checkin(), self.range.checkout()) else {
            return Err(SearchError::MissingDates);
        };
        if checkin >= checkout {
            return Err(SearchError::CheckoutNotAfterCheckin);
        }
        Ok(SearchRequest {
            location: location.to_string(),
            checkin,
            checkout,
            guests: self.guests,
            with_pets: self.with_pets,
        })
    }
}
