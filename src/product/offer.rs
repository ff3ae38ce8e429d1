//! Product context and commercial-offer availability.
//!
//! The JSON field names follow the catalog feed, including its
//! `commertialOffer` spelling and the capitalized `AvailableQuantity`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// CommercialOffer
// ---------------------------------------------------------------------------

/// Price/availability terms offered by a seller.
///
/// `available_quantity` is kept as raw JSON: feeds send numbers, numeric
/// strings, garbage, or nothing at all. An explicit `null` is kept as
/// `Some(Value::Null)`, distinct from an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommercialOffer {
    #[serde(
        rename = "AvailableQuantity",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_quantity: Option<Value>,
}

fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl CommercialOffer {
    /// An offer with a numeric stock quantity.
    pub fn with_quantity(quantity: i64) -> Self {
        Self {
            available_quantity: Some(Value::from(quantity)),
        }
    }

    /// The quantity as a number, or `None` when absent or non-numeric.
    pub fn quantity(&self) -> Option<f64> {
        self.available_quantity.as_ref().and_then(numeric_value)
    }
}

/// Numeric reading of a loosely typed quantity field.
///
/// Follows the storefront's unary-plus coercion: `null` and blank strings
/// are 0, booleans are 0 or 1, and an array reads as its only element
/// (an empty array is 0). Objects, longer arrays and junk strings have no
/// numeric reading.
fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => string_number(s)?,
        Value::Array(items) => array_number(items)?,
        Value::Object(_) => return None,
    };
    (!number.is_nan()).then_some(number)
}

/// An array is read through its joined text, so only `[]` and `[x]` can be
/// numeric, and a lone boolean or object element never is.
fn array_number(items: &[Value]) -> Option<f64> {
    match items {
        [] => Some(0.0),
        [Value::Null] => Some(0.0),
        [Value::Number(n)] => n.as_f64(),
        [Value::String(s)] => string_number(s),
        [Value::Array(inner)] => array_number(inner),
        _ => None,
    }
}

fn string_number(s: &str) -> Option<f64> {
    let s = s.trim();
    match s {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.starts_with('+') {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }
    // `f64::from_str` also takes "inf" and "nan", which are not quantities.
    if s.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return None;
    }
    s.parse().ok()
}

/// Whether the offer can be bought.
///
/// Unknown stock (no offer, no quantity, or a non-numeric quantity) counts as
/// available; otherwise the quantity must be greater than zero.
pub fn is_available(offer: Option<&CommercialOffer>) -> bool {
    match offer.and_then(CommercialOffer::quantity) {
        Some(quantity) => quantity > 0.0,
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Product context
// ---------------------------------------------------------------------------

/// A seller listing for an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(rename = "commertialOffer", default)]
    pub commercial_offer: Option<CommercialOffer>,
}

/// The SKU currently selected on a product page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sellers: Vec<Seller>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Seller>, D::Error> {
    Option::<Vec<Seller>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SelectedItem {
    /// The first seller's offer, which drives availability.
    pub fn primary_offer(&self) -> Option<&CommercialOffer> {
        self.sellers.first()?.commercial_offer.as_ref()
    }
}

/// Product data shared with every widget on a product page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContext {
    #[serde(default)]
    pub selected_item: Option<SelectedItem>,
}

// ===========================================================================
// Tests
// ===========================================================================
