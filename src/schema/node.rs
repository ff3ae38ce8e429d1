//! Admin schema nodes for the page builder.
//!
//! A [`SchemaNode`] serializes to the JSON-schema dialect the page builder
//! reads: `type`, `title`, `enum`/`enumNames`, numeric bounds, an optional
//! `widget` hint (`ui:widget`, `ui:options`) and the `isLayout` flag.
//! Object properties keep insertion order.

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// SchemaType
// ---------------------------------------------------------------------------

/// JSON-schema primitive type of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Number,
    Boolean,
}

// ---------------------------------------------------------------------------
// UiWidget
// ---------------------------------------------------------------------------

/// Editor control hint (`"ui:widget"` plus optional `"ui:options"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiWidget {
    #[serde(rename = "ui:widget")]
    pub widget: String,
    #[serde(rename = "ui:options", skip_serializing_if = "Option::is_none")]
    pub options: Option<UiOptions>,
}

/// Layout options for an editor control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiOptions {
    pub inline: bool,
}

impl UiWidget {
    /// Radio buttons, stacked or inline.
    pub fn radio(inline: bool) -> Self {
        Self {
            widget: "radio".to_owned(),
            options: Some(UiOptions { inline }),
        }
    }

    /// Image upload control.
    pub fn image_uploader() -> Self {
        Self {
            widget: "image-uploader".to_owned(),
            options: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SchemaNode
// ---------------------------------------------------------------------------

/// One editable property (or property group) in an admin schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<UiWidget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_layout: Option<bool>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_properties"
    )]
    pub properties: Vec<(String, SchemaNode)>,
}

impl SchemaNode {
    fn of(kind: SchemaType, title: &str) -> Self {
        Self {
            kind,
            title: Some(title.to_owned()),
            description: None,
            enum_values: Vec::new(),
            enum_names: Vec::new(),
            default: None,
            minimum: None,
            maximum: None,
            multiple_of: None,
            widget: None,
            is_layout: None,
            properties: Vec::new(),
        }
    }

    pub fn object(title: &str) -> Self {
        Self::of(SchemaType::Object, title)
    }

    pub fn string(title: &str) -> Self {
        Self::of(SchemaType::String, title)
    }

    pub fn number(title: &str) -> Self {
        Self::of(SchemaType::Number, title)
    }

    pub fn boolean(title: &str) -> Self {
        Self::of(SchemaType::Boolean, title)
    }

    /// Set the description message key (builder).
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Restrict to the given values, labelled by `names` (builder).
    ///
    /// `names` may be empty when the values label themselves.
    pub fn with_enum<V: Into<Value>>(
        mut self,
        values: impl IntoIterator<Item = V>,
        names: &[&str],
    ) -> Self {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self.enum_names = names.iter().map(|n| (*n).to_owned()).collect();
        self
    }

    /// Set the default value (builder).
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Bound a number to `[minimum, maximum]` in steps of `step` (builder).
    pub fn with_range(mut self, minimum: f64, maximum: f64, step: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self.multiple_of = Some(step);
        self
    }

    /// Set the editor control (builder).
    pub fn with_widget(mut self, widget: UiWidget) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Mark the property as layout (`true`) or content (`false`) (builder).
    pub fn with_layout(mut self, is_layout: bool) -> Self {
        self.is_layout = Some(is_layout);
        self
    }

    /// Append a child property, replacing one with the same name (builder).
    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = node,
            None => self.properties.push((name, node)),
        }
        self
    }

    /// Look up a direct child property.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Look up a nested property by a dotted path such as `zoomProps.zoomType`.
    pub fn lookup(&self, path: &str) -> Option<&SchemaNode> {
        path.split('.')
            .try_fold(self, |node, segment| node.property(segment))
    }

    /// Names of the direct child properties, in order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|(n, _)| n.as_str()).collect()
    }
}

fn serialize_properties<S: Serializer>(
    properties: &[(String, SchemaNode)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(properties.iter().map(|(name, node)| (name, node)))
}

// ===========================================================================
// Tests
// ===========================================================================
