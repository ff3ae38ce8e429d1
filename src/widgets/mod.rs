//! Built-in storefront widgets: ProductImages, CategoriesHighlights,
//! AvailabilitySubscriber.

pub mod options;
pub mod product_images;
pub mod categories_highlights;
pub mod availability_subscriber;

pub use options::{BgOpacity, CardShape, Position, ThumbnailsOrientation, ZoomType};
pub use product_images::{MountedProductImages, ProductImages, ProductImagesProps, Slide, ZoomProps};
pub use categories_highlights::{
    CategoriesHighlights, CategoriesHighlightsProps, CategoryCard, HighlightsGrid, ITEMS_PER_ROW,
};
pub use availability_subscriber::{
    AvailabilitySubscriber, AvailabilitySubscriberProps, SubscriberForm,
};
