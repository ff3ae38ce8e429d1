//! AvailabilitySubscriber widget: "notify me" form for out-of-stock SKUs.
//!
//! The form only appears when the selected SKU is known to be out of stock.
//! Unknown stock counts as available, so the form stays hidden.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::product::{is_available, ProductContext};
use crate::widget::traits::Widget;

/// Props accepted by [`AvailabilitySubscriber`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilitySubscriberProps {
    /// Overrides the availability computed from the product context.
    pub available: Option<bool>,
    /// Overrides the selected item's SKU id.
    pub sku_id: Option<String>,
}

/// The subscription form the host should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberForm {
    pub sku_id: Option<String>,
}

/// Out-of-stock subscription trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySubscriber {
    props: AvailabilitySubscriberProps,
}

impl AvailabilitySubscriber {
    pub fn new(props: AvailabilitySubscriberProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &AvailabilitySubscriberProps {
        &self.props
    }

    /// Whether the selected SKU can be bought.
    pub fn available(&self, context: &ProductContext) -> bool {
        self.props.available.unwrap_or_else(|| {
            let offer = context
                .selected_item
                .as_ref()
                .and_then(|item| item.primary_offer());
            is_available(offer)
        })
    }

    /// The form to show, or `None` while the SKU is (or may be) in stock.
    pub fn resolve(&self, context: &ProductContext) -> Option<SubscriberForm> {
        if self.available(context) {
            return None;
        }
        let sku_id = self.props.sku_id.clone().or_else(|| {
            context
                .selected_item
                .as_ref()
                .and_then(|item| item.item_id.clone())
        });
        tracing::debug!(sku_id = sku_id.as_deref(), "showing availability subscriber");
        Some(SubscriberForm { sku_id })
    }
}

impl Widget for AvailabilitySubscriber {
    fn widget_type(&self) -> &str {
        "AvailabilitySubscriber"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
