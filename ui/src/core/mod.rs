//! Platform-agnostic state machines and the glue they need (timers,
//! storage, platform calls). Components in `crate::components` render these.

pub mod calendar;
pub mod carousel;
pub mod guests;
pub mod menus;
pub mod platform;
pub mod responsive;
pub mod search;
pub mod service;
pub mod storage;
pub mod task;
pub mod timing;
pub mod validation;

use thiserror::Error;

/// A component was composed with inputs it cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("carousel has no slides")]
    NoSlides,
    #[error("carousel config has no breakpoints")]
    NoBreakpoints,
}
