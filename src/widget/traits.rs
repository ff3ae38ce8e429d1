//! Widget trait: type name, CSS handles, admin schema.
//!
//! Every storefront widget names itself, lists the CSS handles its markup
//! exposes for theming, and may describe its editable props through an
//! admin schema. The page builder walks widgets through `&dyn Widget`.

use std::any::Any;

use serde_json::Value;

use crate::schema::SchemaNode;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all storefront widgets.
///
/// Object-safe: the page builder keeps heterogeneous widgets as
/// `Box<dyn Widget>`.
pub trait Widget {
    /// Block name used by the page builder (e.g. "ProductImages").
    fn widget_type(&self) -> &str;

    /// CSS handles present in the rendered markup. Empty by default.
    fn css_handles(&self) -> &'static [&'static str] {
        &[]
    }

    /// Admin schema for the current props, if the widget is editable.
    ///
    /// The schema may depend on the props: fields appear or disappear as
    /// other fields change.
    fn schema(&self) -> Option<SchemaNode> {
        None
    }

    /// Extra editor hints keyed by prop path (the builder's `uiSchema`).
    fn ui_schema(&self) -> Option<Value> {
        None
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}

/// Collect `(widget_type, schema)` for every editable widget, in order.
pub fn editable_schemas<'a>(widgets: &[&'a dyn Widget]) -> Vec<(&'a str, SchemaNode)> {
    widgets
        .iter()
        .filter_map(|w| w.schema().map(|schema| (w.widget_type(), schema)))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
