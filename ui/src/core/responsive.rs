//! Viewport-driven adjustments: root font size, the `--vh` unit and the
//! debounce used by every resize handler.

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;

/// Debounce for page-level metrics.
pub const PAGE_RESIZE_DEBOUNCE_MS: u64 = 100;
/// Debounce for carousel re-layout.
pub const CAROUSEL_RESIZE_DEBOUNCE_MS: u64 = 250;
/// Width change that counts as a browser zoom.
pub const ZOOM_WIDTH_DELTA_PX: f64 = 50.0;

/// One reading of the window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub touch: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            touch: false,
        }
    }
}

pub fn root_font_size_px(width: f64) -> u32 {
    if width <= 320.0 {
        14
    } else if width <= 480.0 {
        15
    } else {
        16
    }
}

/// One hundredth of the visible height, exported as `--vh`.
pub fn viewport_unit_px(height: f64) -> f64 {
    height * 0.01
}

/// Remembers the width the font size was last applied at.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomGuard {
    last_width: Option<f64>,
}

impl ZoomGuard {
    /// True on first use and whenever the width moved by more than
    /// `ZOOM_WIDTH_DELTA_PX`; records the width when it returns true.
    pub fn should_apply(&mut self, width: f64) -> bool {
        let apply = self
            .last_width
            .map_or(true, |last| (width - last).abs() > ZOOM_WIDTH_DELTA_PX);
        if apply {
            self.last_width = Some(width);
        }
        apply
    }
}

/// Generation counter: scheduling a new ticket invalidates older ones, so
/// only the last timer of a burst acts.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debouncer {
    pub fn schedule(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_tiers() {
        assert_eq!(root_font_size_px(320.0), 14);
        assert_eq!(root_font_size_px(400.0), 15);
        assert_eq!(root_font_size_px(480.0), 15);
        assert_eq!(root_font_size_px(768.0), 16);
        assert_eq!(root_font_size_px(1920.0), 16);
    }

    #[test]
    fn viewport_unit_is_one_percent() {
        assert_eq!(viewport_unit_px(800.0), 8.0);
    }

    #[test]
    fn only_last_ticket_fires() {
        let debouncer = Debouncer::default();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let shared = debouncer.clone();
        let third = shared.schedule();

        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[test]
    fn zoom_guard_ignores_small_moves() {
        let mut guard = ZoomGuard::default();
        assert!(guard.should_apply(1000.0));
        assert!(!guard.should_apply(1030.0));
        assert!(guard.should_apply(1060.0));
        assert!(!guard.should_apply(1020.0));
    }

    #[test]
    fn viewport_reading_parses_without_touch_flag() {
        let vp: Viewport = serde_json::from_str(r#"{"width": 390, "height": 844}"#).unwrap();
        assert_eq!(vp.width, 390.0);
        assert!(!vp.touch);
    }
}
