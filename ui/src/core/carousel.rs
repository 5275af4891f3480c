//! Carousel state machine shared by every slider on the site.
//!
//! One `Carousel` tracks which slide leads the visible window, how many
//! slides fit in the current viewport and an in-flight pointer drag. The
//! three sliders differ only in their `CarouselConfig`:
//!
//! | preset          | breakpoints (min width → per view) | gap  | drag threshold | bounds   |
//! |-----------------|-------------------------------------|------|----------------|----------|
//! | `fincas()`      | 1200→4, 768→3, 480→2, else 1        | 16px | 50px           | clamped  |
//! | `information()` | 1600→3, 768→2, else 1               | 32px | 100px          | clamped  |
//! | `municipios()`  | one slide leads, order rotates      | 0px  | 50px           | wrapping |
//!
//! Nothing here touches the DOM; the component layer feeds widths and
//! pointer positions in and reads translations back out.

use crate::core::SetupError;

/// Viewport width tier mapped to a number of simultaneously visible slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: f64,
    pub items_per_view: usize,
}

impl Breakpoint {
    pub const fn new(min_width: f64, items_per_view: usize) -> Self {
        Self {
            min_width,
            items_per_view,
        }
    }
}

/// How the index behaves at either end of the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Stops at the first and last full window.
    Clamped,
    /// Rotates back to the start (the municipios deck).
    Wrapping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Sorted by descending `min_width`; the first match wins.
    pub breakpoints: Vec<Breakpoint>,
    pub gap_px: f64,
    pub drag_threshold_px: f64,
    /// Width used before the container has been measured.
    pub fallback_item_width_px: f64,
    pub bounds: Bounds,
    /// Advance one step on this interval while mounted.
    pub autoplay_ms: Option<u64>,
}

impl CarouselConfig {
    pub fn fincas() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::new(1200.0, 4),
                Breakpoint::new(768.0, 3),
                Breakpoint::new(480.0, 2),
            ],
            gap_px: 16.0,
            drag_threshold_px: 50.0,
            fallback_item_width_px: 300.0,
            bounds: Bounds::Clamped,
            autoplay_ms: None,
        }
    }

    pub fn information() -> Self {
        Self {
            breakpoints: vec![Breakpoint::new(1600.0, 3), Breakpoint::new(768.0, 2)],
            gap_px: 32.0,
            drag_threshold_px: 100.0,
            fallback_item_width_px: 360.0,
            bounds: Bounds::Clamped,
            autoplay_ms: None,
        }
    }

    pub fn municipios() -> Self {
        Self {
            breakpoints: vec![Breakpoint::new(0.0, 1)],
            gap_px: 0.0,
            drag_threshold_px: 50.0,
            fallback_item_width_px: 0.0,
            bounds: Bounds::Wrapping,
            autoplay_ms: Some(10_000),
        }
    }

    /// Items per view for a viewport width. Widths below every breakpoint get one.
    pub fn items_per_view(&self, viewport_width: f64) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width >= bp.min_width)
            .map(|bp| bp.items_per_view.max(1))
            .unwrap_or(1)
    }
}

/// Result of releasing a drag or swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    Advanced,
    Retreated,
    SnappedBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_x: f64,
    base_translate: f64,
    live_translate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    config: CarouselConfig,
    total_items: usize,
    current_index: usize,
    items_per_view: usize,
    item_width_px: f64,
    drag: Option<DragState>,
}

impl Carousel {
    /// Builds a carousel positioned at the first slide, sized for a narrow viewport
    /// until the first `resize`.
    pub fn new(config: CarouselConfig, total_items: usize) -> Result<Self, SetupError> {
        if total_items == 0 {
            return Err(SetupError::NoSlides);
        }
        if config.breakpoints.is_empty() {
            return Err(SetupError::NoBreakpoints);
        }
        let item_width_px = config.fallback_item_width_px;
        Ok(Self {
            config,
            total_items,
            current_index: 0,
            items_per_view: 1,
            item_width_px,
            drag: None,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn item_width_px(&self) -> f64 {
        self.item_width_px
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Highest reachable index.
    pub fn max_index(&self) -> usize {
        match self.config.bounds {
            Bounds::Clamped => self.total_items.saturating_sub(self.items_per_view),
            Bounds::Wrapping => self.total_items - 1,
        }
    }

    pub fn can_prev(&self) -> bool {
        match self.config.bounds {
            Bounds::Clamped => self.current_index > 0,
            Bounds::Wrapping => self.total_items > 1,
        }
    }

    pub fn can_next(&self) -> bool {
        match self.config.bounds {
            Bounds::Clamped => self.current_index < self.max_index(),
            Bounds::Wrapping => self.total_items > 1,
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current_index = match self.config.bounds {
            Bounds::Clamped => self.current_index + 1,
            Bounds::Wrapping => (self.current_index + 1) % self.total_items,
        };
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.current_index = match self.config.bounds {
            Bounds::Clamped => self.current_index - 1,
            Bounds::Wrapping => (self.current_index + self.total_items - 1) % self.total_items,
        };
        true
    }

    pub fn go_to_slide(&mut self, index: usize) {
        self.current_index = match self.config.bounds {
            Bounds::Clamped => index.min(self.max_index()),
            Bounds::Wrapping => index % self.total_items,
        };
    }

    /// Applies a new viewport/container measurement. Returns `true` when the
    /// number of items per view changed, which invalidates the indicator dots.
    pub fn resize(&mut self, viewport_width: f64, container_width: f64) -> bool {
        let items_per_view = self.config.items_per_view(viewport_width);
        let changed = items_per_view != self.items_per_view;
        self.items_per_view = items_per_view;

        if container_width > 0.0 {
            let gaps = self.config.gap_px * (items_per_view as f64 - 1.0);
            self.item_width_px = ((container_width - gaps) / items_per_view as f64).max(0.0);
        }

        self.go_to_slide(self.current_index);
        changed
    }

    /// Resting translation for the current index.
    pub fn resting_translate_px(&self) -> f64 {
        match self.config.bounds {
            Bounds::Clamped => {
                -(self.current_index as f64) * (self.item_width_px + self.config.gap_px)
            }
            Bounds::Wrapping => 0.0,
        }
    }

    /// Translation to render: the live drag position while dragging.
    pub fn translate_px(&self) -> f64 {
        self.drag
            .map(|drag| drag.live_translate)
            .unwrap_or_else(|| self.resting_translate_px())
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        let base = self.resting_translate_px();
        self.drag = Some(DragState {
            start_x: pointer_x,
            base_translate: base,
            live_translate: base,
        });
    }

    /// Moves the live translation with the pointer. No clamping while dragging.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        drag.live_translate = drag.base_translate + (pointer_x - drag.start_x);
        Some(drag.live_translate)
    }

    /// Ends the drag and commits at most one step in the direction of travel.
    pub fn end_drag(&mut self) -> DragRelease {
        let Some(drag) = self.drag.take() else {
            return DragRelease::SnappedBack;
        };
        let moved_by = drag.live_translate - drag.base_translate;
        let threshold = self.config.drag_threshold_px;

        if moved_by < -threshold && self.next() {
            DragRelease::Advanced
        } else if moved_by > threshold && self.prev() {
            DragRelease::Retreated
        } else {
            DragRelease::SnappedBack
        }
    }

    /// Ends the drag at `pointer_x`, the last position the pointer reported.
    /// Movement since the previous `drag_to` counts towards the threshold.
    pub fn release_at(&mut self, pointer_x: f64) -> DragRelease {
        self.drag_to(pointer_x);
        self.end_drag()
    }

    /// Number of indicator dots (one per reachable index).
    pub fn indicator_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn is_active_indicator(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Slide indices in display order; rotated for wrapping decks.
    pub fn visible_order(&self) -> Vec<usize> {
        match self.config.bounds {
            Bounds::Clamped => (0..self.total_items).collect(),
            Bounds::Wrapping => (0..self.total_items)
                .map(|offset| (self.current_index + offset) % self.total_items)
                .collect(),
        }
    }
}
