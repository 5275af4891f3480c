//! Checkin/checkout date range and the month grids used to pick it.
//!
//! Each calendar renders a fixed 6×7 grid starting on the Sunday on or before
//! the first of the displayed month. Both grids read from one `DateRange`, so
//! a selection in either calendar is reflected in both.

use thiserror::Error;
use time::{Date, Duration, Month};

/// Cells per month grid (six weeks).
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Checkin,
    Checkout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("checkout must be after checkin")]
    NotAfterCheckin,
    #[error("date is in the past")]
    InPast,
}

/// Selected stay. Checkout, when present, is always strictly after checkin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    checkin: Option<Date>,
    checkout: Option<Date>,
}

impl DateRange {
    pub fn checkin(&self) -> Option<Date> {
        self.checkin
    }

    pub fn checkout(&self) -> Option<Date> {
        self.checkout
    }

    pub fn get(&self, kind: CalendarKind) -> Option<Date> {
        match kind {
            CalendarKind::Checkin => self.checkin,
            CalendarKind::Checkout => self.checkout,
        }
    }

    /// Stores a checkin; an existing checkout on or before it is cleared.
    pub fn select_checkin(&mut self, date: Date) {
        self.checkin = Some(date);
        if self.checkout.is_some_and(|checkout| checkout <= date) {
            self.checkout = None;
        }
    }

    /// Stores a checkout unless it falls on or before the checkin.
    pub fn select_checkout(&mut self, date: Date) -> Result<(), RangeError> {
        if self.checkin.is_some_and(|checkin| date <= checkin) {
            return Err(RangeError::NotAfterCheckin);
        }
        self.checkout = Some(date);
        Ok(())
    }

    /// Strictly between checkin and checkout; false unless both are set.
    pub fn contains_strictly(&self, date: Date) -> bool {
        match (self.checkin, self.checkout) {
            (Some(checkin), Some(checkout)) => date > checkin && date < checkout,
            _ => false,
        }
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.checkin, self.checkout) {
            (Some(checkin), Some(checkout)) => Some((checkout - checkin).whole_days()),
            _ => None,
        }
    }
}

/// Month displayed by one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self {
                year: self.year + 1,
                month: Month::January,
            },
            month => Self {
                year: self.year,
                month: month.next(),
            },
        }
    }

    pub fn prev(self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    pub fn first_day(self) -> Date {
        // Day 1 exists for every month of every representable year.
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// Sunday on or before the first of the month.
    pub fn grid_start(self) -> Date {
        let first = self.first_day();
        let offset = first.weekday().number_days_from_sunday();
        first - Duration::days(i64::from(offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub in_month: bool,
    pub disabled: bool,
    pub today: bool,
    pub selected: bool,
    pub in_range: bool,
    pub range_start: bool,
    pub range_end: bool,
}

impl DayCell {
    /// Space separated CSS classes for the cell.
    pub fn css_class(&self) -> String {
        let mut classes = vec!["calendar-day"];
        if self.disabled {
            classes.push("disabled");
        }
        if self.today {
            classes.push("today");
        }
        if self.selected {
            classes.push("selected");
        }
        if self.in_range {
            classes.push("in-range");
        }
        if self.range_start {
            classes.push("range-start");
        }
        if self.range_end {
            classes.push("range-end");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<DayCell>,
}

/// Builds the 42 cells for `cursor` as seen from calendar `kind`.
pub fn month_grid(
    cursor: MonthCursor,
    today: Date,
    range: &DateRange,
    kind: CalendarKind,
) -> MonthGrid {
    let start = cursor.grid_start();
    let selected = range.get(kind);
    let both_set = range.checkin.is_some() && range.checkout.is_some();

    let cells = (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let in_month = date.month() == cursor.month && date.year() == cursor.year;
            DayCell {
                date,
                in_month,
                disabled: !in_month || date < today,
                today: date == today,
                selected: selected == Some(date),
                in_range: range.contains_strictly(date),
                range_start: both_set && range.checkin == Some(date),
                range_end: both_set && range.checkout == Some(date),
            }
        })
        .collect();

    MonthGrid { cursor, cells }
}

/// Two independently paged calendars over one shared range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    range: DateRange,
    checkin_month: MonthCursor,
    checkout_month: MonthCursor,
    today: Date,
}

impl DateRangePicker {
    pub fn new(today: Date) -> Self {
        let cursor = MonthCursor::containing(today);
        Self {
            range: DateRange::default(),
            checkin_month: cursor,
            checkout_month: cursor,
            today,
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn month(&self, kind: CalendarKind) -> MonthCursor {
        match kind {
            CalendarKind::Checkin => self.checkin_month,
            CalendarKind::Checkout => self.checkout_month,
        }
    }

    /// Pages one calendar by `step` months (negative goes back). The other
    /// calendar is untouched.
    pub fn page(&mut self, kind: CalendarKind, step: i32) {
        let cursor = match kind {
            CalendarKind::Checkin => &mut self.checkin_month,
            CalendarKind::Checkout => &mut self.checkout_month,
        };
        for _ in 0..step.unsigned_abs() {
            *cursor = if step > 0 { cursor.next() } else { cursor.prev() };
        }
    }

    pub fn select(&mut self, kind: CalendarKind, date: Date) -> Result<(), RangeError> {
        if date < self.today {
            return Err(RangeError::InPast);
        }
        match kind {
            CalendarKind::Checkin => {
                self.range.select_checkin(date);
                Ok(())
            }
            CalendarKind::Checkout => self.range.select_checkout(date),
        }
    }

    pub fn grid(&self, kind: CalendarKind) -> MonthGrid {
        month_grid(self.month(kind), self.today, &self.range, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    #[test]
    fn checkout_before_checkin_is_rejected() {
        let mut range = DateRange::default();
        range.select_checkin(date!(2024 - 03 - 10));
        assert_eq!(
            range.select_checkout(date!(2024 - 03 - 05)),
            Err(RangeError::NotAfterCheckin)
        );
        assert_eq!(
            range.select_checkout(date!(2024 - 03 - 10)),
            Err(RangeError::NotAfterCheckin)
        );
        assert_eq!(range.checkout(), None);
    }

    #[test]
    fn valid_range_marks_nights_between() {
        let mut range = DateRange::default();
        range.select_checkin(date!(2024 - 03 - 10));
        range.select_checkout(date!(2024 - 03 - 15)).unwrap();

        assert!(!range.contains_strictly(date!(2024 - 03 - 10)));
        for day in 11..=14 {
            let d = Date::from_calendar_date(2024, Month::March, day).unwrap();
            assert!(range.contains_strictly(d), "day {day} should be in range");
        }
        assert!(!range.contains_strictly(date!(2024 - 03 - 15)));
        assert_eq!(range.nights(), Some(5));
    }

    #[test]
    fn moving_checkin_past_checkout_clears_it() {
        let mut range = DateRange::default();
        range.select_checkin(date!(2024 - 03 - 10));
        range.select_checkout(date!(2024 - 03 - 15)).unwrap();

        range.select_checkin(date!(2024 - 03 - 12));
        assert_eq!(range.checkout(), Some(date!(2024 - 03 - 15)));

        range.select_checkin(date!(2024 - 03 - 15));
        assert_eq!(range.checkout(), None);
    }

    #[test]
    fn checkout_without_checkin_is_accepted() {
        let mut range = DateRange::default();
        assert!(range.select_checkout(date!(2024 - 03 - 15)).is_ok());
        assert!(!range.contains_strictly(date!(2024 - 03 - 14)));
    }

    #[test]
    fn grid_starts_on_sunday_and_has_42_cells() {
        let cursor = MonthCursor {
            year: 2024,
            month: Month::March,
        };
        let grid = month_grid(
            cursor,
            date!(2024 - 01 - 01),
            &DateRange::default(),
            CalendarKind::Checkin,
        );
        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(grid.cells[0].date, date!(2024 - 02 - 25));
        assert_eq!(grid.cells[0].date.weekday(), Weekday::Sunday);
        assert!(grid.cells[0].disabled);
        assert!(!grid.cells[5].disabled);
        assert_eq!(grid.cells[5].date, date!(2024 - 03 - 01));
    }

    #[test]
    fn month_starting_on_sunday_begins_with_the_first() {
        let cursor = MonthCursor {
            year: 2024,
            month: Month::September,
        };
        assert_eq!(cursor.grid_start(), date!(2024 - 09 - 01));
    }

    #[test]
    fn past_days_are_disabled_and_today_is_marked() {
        let today = date!(2024 - 03 - 10);
        let grid = month_grid(
            MonthCursor::containing(today),
            today,
            &DateRange::default(),
            CalendarKind::Checkin,
        );
        let cell = |d: Date| grid.cells.iter().find(|c| c.date == d).copied().unwrap();
        assert!(cell(date!(2024 - 03 - 09)).disabled);
        assert!(!cell(today).disabled);
        assert!(cell(today).today);
        assert!(cell(today).css_class().contains("today"));
    }

    #[test]
    fn both_grids_show_the_same_range() {
        let mut picker = DateRangePicker::new(date!(2024 - 03 - 01));
        picker.select(CalendarKind::Checkin, date!(2024 - 03 - 10)).unwrap();
        picker.select(CalendarKind::Checkout, date!(2024 - 03 - 15)).unwrap();

        for kind in [CalendarKind::Checkin, CalendarKind::Checkout] {
            let grid = picker.grid(kind);
            let in_range: Vec<u8> = grid
                .cells
                .iter()
                .filter(|c| c.in_range)
                .map(|c| c.date.day())
                .collect();
            assert_eq!(in_range, vec![11, 12, 13, 14]);
            assert!(grid.cells.iter().any(|c| c.range_start && c.date.day() == 10));
            assert!(grid.cells.iter().any(|c| c.range_end && c.date.day() == 15));
        }

        let checkin_grid = picker.grid(CalendarKind::Checkin);
        let selected: Vec<u8> = checkin_grid
            .cells
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(selected, vec![10]);
    }

    #[test]
    fn picker_rejects_past_dates() {
        let mut picker = DateRangePicker::new(date!(2024 - 03 - 10));
        assert_eq!(
            picker.select(CalendarKind::Checkin, date!(2024 - 03 - 09)),
            Err(RangeError::InPast)
        );
        assert_eq!(picker.range().checkin(), None);
    }

    #[test]
    fn paging_moves_one_calendar_only() {
        let mut picker = DateRangePicker::new(date!(2024 - 12 - 20));
        picker.page(CalendarKind::Checkout, 1);
        assert_eq!(
            picker.month(CalendarKind::Checkout),
            MonthCursor {
                year: 2025,
                month: Month::January
            }
        );
        assert_eq!(
            picker.month(CalendarKind::Checkin),
            MonthCursor {
                year: 2024,
                month: Month::December
            }
        );
        picker.page(CalendarKind::Checkout, -2);
        assert_eq!(
            picker.month(CalendarKind::Checkout),
            MonthCursor {
                year: 2024,
                month: Month::November
            }
        );
    }
}
