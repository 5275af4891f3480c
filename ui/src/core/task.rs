//! Cancellable background work.
//!
//! Wraps a future in `futures::future::Abortable` and hands back a handle.
//! Cancelling stops the future at its next poll; dropping the handle does not.

use std::future::Future;

use futures::future::{AbortHandle, Abortable, Aborted};

#[derive(Debug, Clone)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    /// Pairs `fut` with a handle without spawning it.
    pub fn wrap<F: Future>(fut: F) -> (Self, impl Future<Output = Result<F::Output, Aborted>>) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { abort }, Abortable::new(fut, registration))
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Spawns `fut` on the UI runtime of the current component and returns its handle.
pub fn spawn_cancellable<F>(fut: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (handle, task) = TaskHandle::wrap(fut);
    dioxus::prelude::spawn(async move {
        let _ = task.await;
    });
    handle
}
