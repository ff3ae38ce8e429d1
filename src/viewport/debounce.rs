//! Trailing debounce on the tokio timer queue.
//!
//! [`Debouncer::call`] schedules the action to run once the quiescence window
//! has elapsed. Every call pushes the deadline back, so a burst of calls runs
//! the action exactly once, `window` after the last call. [`Debouncer::clear`]
//! cancels whatever is pending; [`Debouncer::close`] also refuses later calls.
//!
//! Each scheduled task carries the generation it was scheduled under and
//! checks it, under the same lock `clear` takes, right before running. A
//! cancelled or superseded task therefore never runs its action, even if its
//! timer had already fired when it was aborted.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::WidgetError;

/// Action run when the debounce window closes.
pub type DebouncedAction = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Shared {
    generation: u64,
    pending: Option<JoinHandle<()>>,
    closed: bool,
}

/// Trailing-edge debouncer.
///
/// The action runs while the debouncer's internal lock is held, so it must
/// not call back into the same debouncer.
pub struct Debouncer {
    window: Duration,
    runtime: Handle,
    action: DebouncedAction,
    shared: Arc<Mutex<Shared>>,
}

impl Debouncer {
    /// Create a debouncer on the current tokio runtime.
    ///
    /// Fails with [`WidgetError::NoTimerRuntime`] outside a runtime context.
    pub fn new(window: Duration, action: DebouncedAction) -> Result<Self, WidgetError> {
        let runtime = Handle::try_current().map_err(|_| WidgetError::NoTimerRuntime)?;
        Ok(Self::with_handle(runtime, window, action))
    }

    /// Create a debouncer that schedules on an explicit runtime.
    pub fn with_handle(runtime: Handle, window: Duration, action: DebouncedAction) -> Self {
        Self {
            window,
            runtime,
            action,
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    /// The quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule the action, replacing any pending schedule.
    ///
    /// Does nothing once the debouncer is closed.
    pub fn call(&self) {
        let deadline = Instant::now() + self.window;
        let mut shared = lock(&self.shared);
        if shared.closed {
            return;
        }
        shared.generation += 1;
        if let Some(previous) = shared.pending.take() {
            previous.abort();
        }

        let generation = shared.generation;
        let task_shared = Arc::clone(&self.shared);
        let action = Arc::clone(&self.action);
        shared.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut shared = lock(&task_shared);
            if shared.generation != generation {
                return;
            }
            shared.pending = None;
            action();
        }));
    }

    /// Cancel the pending action, if any.
    pub fn clear(&self) {
        cancel(&mut lock(&self.shared));
    }

    /// Cancel the pending action and ignore every later [`call`](Self::call).
    pub fn close(&self) {
        let mut shared = lock(&self.shared);
        cancel(&mut shared);
        shared.closed = true;
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        lock(&self.shared).closed
    }

    /// Run the pending action now instead of waiting for the window.
    ///
    /// Returns `false` when nothing was pending.
    pub fn flush(&self) -> bool {
        let mut shared = lock(&self.shared);
        let Some(pending) = shared.pending.take() else {
            return false;
        };
        shared.generation += 1;
        pending.abort();
        (self.action)();
        true
    }

    /// Whether an action is scheduled and has not yet run.
    pub fn is_pending(&self) -> bool {
        lock(&self.shared).pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("pending", &self.is_pending())
            .finish()
    }
}

fn cancel(shared: &mut Shared) {
    shared.generation += 1;
    if let Some(pending) = shared.pending.take() {
        pending.abort();
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===========================================================================
// Tests
// ===========================================================================
