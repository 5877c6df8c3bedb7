//! Product records as served by the catalog endpoint.
//!
//! ## Observed shape
//!
//! ### `sizes`
//! Either a JSON object (`{"M": true, "L": false}`) or the same object
//! serialized into a string (`"{\"M\":true}"`). Both decode into
//! [`SizeAvailability`]. Labels outside the fixed size run are ignored.
//!
//! ### `in_stock`
//! Arrives as a boolean or a string (`"false"`, `"FALSE"`, `"true"`). Only
//! the case-insensitive text `false` marks a product sold out.
//!
//! ### `image1` .. `image5`
//! Image URLs; unused slots are `null`, `""` or whitespace.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::CoreError;

/// Garment size labels offered by the storefront, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "2XL")]
    Xxl,
    #[serde(rename = "3XL")]
    Xxxl,
}

impl Size {
    pub const ALL: [Size; 7] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::Xxxl,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "2XL",
            Size::Xxxl => "3XL",
        }
    }

    /// Exact, case-sensitive lookup used for keys in the `sizes` payload.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Size> {
        Size::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = CoreError;

    /// Lenient parse for user input: surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Size::from_label(&upper).ok_or_else(|| CoreError::UnknownSize(s.to_string()))
    }
}

/// Per-size availability flags for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SizeAvailability(BTreeMap<Size, bool>);

impl SizeAvailability {
    #[must_use]
    pub fn is_available(&self, size: Size) -> bool {
        self.0.get(&size).copied().unwrap_or(false)
    }

    /// Sizes flagged available, in [`Size::ALL`] order.
    pub fn available(&self) -> impl Iterator<Item = Size> + '_ {
        self.0
            .iter()
            .filter_map(|(size, available)| available.then_some(*size))
    }

    /// Builds availability from a raw `sizes` value, parsing the
    /// string-encoded form when needed.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => Self(
                map.iter()
                    .filter_map(|(label, flag)| {
                        Size::from_label(label).map(|size| (size, is_truthy(flag)))
                    })
                    .collect(),
            ),
            Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
                Ok(inner @ Value::Object(_)) => Self::from_value(&inner),
                Ok(other) => {
                    tracing::warn!(sizes = %other, "encoded sizes is not an object; treating as unavailable");
                    Self::default()
                }
                Err(e) => {
                    tracing::warn!(sizes = %encoded, error = %e, "could not parse encoded sizes; treating as unavailable");
                    Self::default()
                }
            },
            Value::Null => Self::default(),
            other => {
                tracing::warn!(sizes = %other, "unexpected sizes shape; treating as unavailable");
                Self::default()
            }
        }
    }
}

impl FromIterator<(Size, bool)> for SizeAvailability {
    fn from_iter<I: IntoIterator<Item = (Size, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for SizeAvailability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A catalog product. Read-only for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Identity key for wishlist membership and card state.
    #[serde(deserialize_with = "de::code")]
    pub product_code: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::price")]
    pub price: f64,
    /// Category such as `"Saree"` or `"Kurti"`; empty when uncategorised.
    #[serde(rename = "type", default, deserialize_with = "de::text")]
    pub product_type: String,
    #[serde(default)]
    pub sizes: SizeAvailability,
    /// Raw stock marker; see [`Product::is_sold_out`].
    #[serde(default)]
    pub in_stock: Value,
    #[serde(default)]
    pub image1: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
    #[serde(default)]
    pub image3: Option<String>,
    #[serde(default)]
    pub image4: Option<String>,
    #[serde(default)]
    pub image5: Option<String>,
}

impl Product {
    /// Returns `true` when the stock marker reads `false` in any case.
    ///
    /// Sold-out products stay in the catalog; only card interaction is gated.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        match &self.in_stock {
            Value::Bool(b) => !b,
            Value::String(s) => s.eq_ignore_ascii_case("false"),
            _ => false,
        }
    }

    /// Non-blank image references in slot order.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        [
            &self.image1,
            &self.image2,
            &self.image3,
            &self.image4,
            &self.image5,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .filter(|url| !url.trim().is_empty())
        .collect()
    }

    #[must_use]
    pub fn has_size(&self, size: Size) -> bool {
        self.sizes.is_available(size)
    }
}

/// Lenient field decoders for loosely typed upstream JSON.
mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!(
                "product_code must be a string or number, got {other}"
            ))),
        }
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        })
    }

    pub(super) fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("price {n} is not representable"))),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| D::Error::custom(format!("price \"{s}\" is not numeric: {e}"))),
            other => Err(D::Error::custom(format!(
                "price must be a number, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
