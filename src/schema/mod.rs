//! Admin schemas describing editable widget props for the page builder.

pub mod node;

pub use node::{SchemaNode, SchemaType, UiOptions, UiWidget};
