//! Adult/children counters for the search bar.

use serde::{Deserialize, Serialize};

/// Upper bound for either counter.
pub const MAX_GUESTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestKind {
    Adults,
    Children,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
        }
    }
}

impl GuestCounts {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn get(&self, kind: GuestKind) -> u32 {
        match kind {
            GuestKind::Adults => self.adults,
            GuestKind::Children => self.children,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    /// Adds one guest. Adding a child with no adults also brings one adult.
    pub fn increment(&mut self, kind: GuestKind) -> bool {
        if !self.can_increment(kind) {
            return false;
        }
        match kind {
            GuestKind::Adults => self.adults += 1,
            GuestKind::Children => {
                self.children += 1;
                if self.adults == 0 {
                    self.adults = 1;
                }
            }
        }
        true
    }

    /// Removes one guest. The last adult stays while children are present.
    pub fn decrement(&mut self, kind: GuestKind) -> bool {
        if !self.can_decrement(kind) {
            return false;
        }
        match kind {
            GuestKind::Adults => self.adults -= 1,
            GuestKind::Children => self.children -= 1,
        }
        true
    }

    pub fn can_increment(&self, kind: GuestKind) -> bool {
        self.get(kind) < MAX_GUESTS
    }

    pub fn can_decrement(&self, kind: GuestKind) -> bool {
        match kind {
            GuestKind::Adults => {
                self.adults > 0 && !(self.adults == 1 && self.children > 0)
            }
            GuestKind::Children => self.children > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_without_adult_brings_an_adult() {
        let mut counts = GuestCounts::new(0, 0);
        assert!(counts.increment(GuestKind::Children));
        assert_eq!(counts, GuestCounts::new(1, 1));
    }

    #[test]
    fn last_adult_stays_with_children() {
        let mut counts = GuestCounts::new(1, 1);
        assert!(!counts.can_decrement(GuestKind::Adults));
        assert!(!counts.decrement(GuestKind::Adults));
        assert_eq!(counts, GuestCounts::new(1, 1));

        assert!(counts.decrement(GuestKind::Children));
        assert!(counts.decrement(GuestKind::Adults));
        assert_eq!(counts, GuestCounts::new(0, 0));
    }

    #[test]
    fn bounded_at_both_ends() {
        let mut counts = GuestCounts::new(MAX_GUESTS, 0);
        assert!(!counts.increment(GuestKind::Adults));
        assert_eq!(counts.adults, MAX_GUESTS);
        assert!(!counts.can_increment(GuestKind::Adults));

        assert!(!counts.decrement(GuestKind::Children));
        assert_eq!(counts.children, 0);
    }

    #[test]
    fn starts_with_two_adults() {
        let counts = GuestCounts::default();
        assert_eq!(counts.total(), 2);
        assert!(counts.can_decrement(GuestKind::Adults));
        assert!(!counts.can_decrement(GuestKind::Children));
    }
}
