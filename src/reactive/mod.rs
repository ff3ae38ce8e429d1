//! Reactive state driving host re-renders.
//!
//! - [`RenderTrigger`] — epoch cell bumped by debounced recomputation.

pub mod trigger;

pub use trigger::RenderTrigger;
