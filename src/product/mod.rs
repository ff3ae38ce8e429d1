//! Product data consumed by the widgets.

pub mod offer;

pub use offer::{is_available, CommercialOffer, ProductContext, SelectedItem, Seller};
