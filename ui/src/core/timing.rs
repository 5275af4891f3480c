//! Timer utilities for debounced handlers, drag frames and simulated latency.

use time::{Date, OffsetDateTime};

/// Tick of the drag frame loop (about one display frame).
pub const FRAME_MS: u64 = 16;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Local calendar date, falling back to UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
