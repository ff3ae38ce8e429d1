//! Responsive images: resolution ladders and width-based selection.

pub mod asset;
pub mod select;

pub use asset::{ImageAsset, SelectedImage};
pub use select::select_best_index;
