//! Viewport width source and resize subscriptions.
//!
//! Widgets never read a global display width. They take a
//! [`ViewportProvider`], which exposes the current width and a
//! subscribe/unsubscribe pair for width changes. [`SimulatedViewport`] is an
//! in-memory provider for headless hosts and tests.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ViewportProvider::subscribe`].
    pub struct ListenerId;
}

/// Callback invoked with the new viewport width after each resize.
pub type ResizeListener = Arc<dyn Fn(u32) + Send + Sync>;

// ---------------------------------------------------------------------------
// ViewportProvider
// ---------------------------------------------------------------------------

/// Source of the display viewport width.
pub trait ViewportProvider: Send + Sync {
    /// Current viewport width in pixels.
    fn width(&self) -> u32;

    /// Register a resize listener. It stays registered until unsubscribed.
    fn subscribe(&self, listener: ResizeListener) -> ListenerId;

    /// Remove a listener. Returns `false` if `id` was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

// ---------------------------------------------------------------------------
// SimulatedViewport
// ---------------------------------------------------------------------------

struct Inner {
    width: u32,
    listeners: SlotMap<ListenerId, ResizeListener>,
}

/// In-memory viewport whose width is driven by [`SimulatedViewport::resize`].
pub struct SimulatedViewport {
    inner: Mutex<Inner>,
}

impl SimulatedViewport {
    /// Create a viewport with the given initial width.
    pub fn new(width: u32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                width,
                listeners: SlotMap::with_key(),
            }),
        }
    }

    /// Change the width and notify every listener.
    ///
    /// Listeners run after the internal lock is released, so they may read
    /// the width or unsubscribe themselves.
    pub fn resize(&self, width: u32) {
        let listeners: Vec<ResizeListener> = {
            let mut inner = self.lock();
            inner.width = width;
            inner.listeners.values().cloned().collect()
        };
        tracing::trace!(width, listeners = listeners.len(), "viewport resized");
        for listener in listeners {
            listener(width);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ViewportProvider for SimulatedViewport {
    fn width(&self) -> u32 {
        self.lock().width
    }

    fn subscribe(&self, listener: ResizeListener) -> ListenerId {
        self.lock().listeners.insert(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.lock().listeners.remove(id).is_some()
    }
}

impl fmt::Debug for SimulatedViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("SimulatedViewport")
            .field("width", &inner.width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

    #[test]
    fn reports_initial_width() {
        let vp = SimulatedViewport::new(1024);
        assert_eq!(vp.width(), 1024);
    }

    #[test]
    fn resize_updates_width() {
        let vp = SimulatedViewport::new(1024);
        vp.resize(375);
        assert_eq!(vp.width(), 375);
    }

    #[test]
    fn listener_receives_new_width() {
        let vp = SimulatedViewport::new(1024);
        let seen = Arc::new(AtomicU32::new(0));
        let seen_c = seen.clone();
        vp.subscribe(Arc::new(move |w| seen_c.store(w, Ordering::SeqCst)));
        vp.resize(800);
        assert_eq!(seen.load(Ordering::SeqCst), 800);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let vp = SimulatedViewport::new(1024);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_c = calls.clone();
        let id = vp.subscribe(Arc::new(move |_| {
            calls_c.fetch_add(1, Ordering::SeqCst);
        }));
        vp.resize(900);
        assert!(vp.unsubscribe(id));
        vp.resize(800);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(vp.listener_count(), 0);
    }

    #[test]
    fn double_unsubscribe_returns_false() {
        let vp = SimulatedViewport::new(1024);
        let id = vp.subscribe(Arc::new(|_| {}));
        assert!(vp.unsubscribe(id));
        assert!(!vp.unsubscribe(id));
    }

    #[test]
    fn listener_may_read_width_during_notification() {
        let vp = Arc::new(SimulatedViewport::new(10));
        let seen = Arc::new(AtomicU32::new(0));
        let (vp_c, seen_c) = (vp.clone(), seen.clone());
        vp.subscribe(Arc::new(move |_| seen_c.store(vp_c.width(), Ordering::SeqCst)));
        vp.resize(20);
        assert_eq!(seen.load(Ordering::SeqCst), 20);
    }

    #[test]
    fn debug_shows_width_and_listener_count() {
        let vp = SimulatedViewport::new(42);
        vp.subscribe(Arc::new(|_| {}));
        let dbg = format!("{:?}", vp);
        assert!(dbg.contains("SimulatedViewport"));
        assert!(dbg.contains("42"));
    }
}
