//! Viewport width source, resize subscriptions, and debounced recomputation.

pub mod debounce;
pub mod provider;

pub use debounce::{DebouncedAction, Debouncer};
pub use provider::{ListenerId, ResizeListener, SimulatedViewport, ViewportProvider};
