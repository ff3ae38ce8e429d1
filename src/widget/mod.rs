//! Widget system: the trait every storefront block implements.

pub mod traits;

pub use traits::{editable_schemas, Widget};
