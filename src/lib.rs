//! # storefront-widgets
//!
//! Headless storefront widgets for an e-commerce page renderer.
//!
//! Widgets take product and category data as props and produce view models
//! for a rendering host. Editable widgets also describe their props through
//! an admin schema consumed by a visual page builder.
//!
//! ## Core Systems
//!
//! - **[`image`]** — Resolution ladders and width-based best-image selection
//! - **[`viewport`]** — Injected viewport width, resize listeners, trailing debounce
//! - **[`reactive`]** — Render trigger the host watches for re-renders
//! - **[`product`]** — Product context and commercial-offer availability
//! - **[`schema`]** — Admin schema nodes for the page builder
//! - **[`widget`]** — Widget trait
//! - **[`widgets`]** — ProductImages, CategoriesHighlights, AvailabilitySubscriber
//! - **[`config`]** — Mount-time configuration
//! - **[`error`]** — Crate error type

// Foundation
pub mod config;
pub mod error;

// Core systems
pub mod image;
pub mod product;
pub mod schema;
pub mod viewport;

// Reactivity
pub mod reactive;

// Widget system
pub mod widget;
pub mod widgets;

pub use error::WidgetError;
