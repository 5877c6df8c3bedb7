//! Decoding of the catalog response body.

use hivaas_core::Product;
use serde_json::Value;

use crate::error::ClientError;

/// Decodes a JSON array of products.
///
/// A body that is not a JSON array is an error. Individual items that fail to
/// decode are skipped with a warning so one malformed record does not empty
/// the catalog.
///
/// # Errors
///
/// Returns [`ClientError::Deserialize`] if `body` is not a JSON array.
pub fn parse_products(body: &str, context: &str) -> Result<Vec<Product>, ClientError> {
    let raw: Vec<Value> = serde_json::from_str(body).map_err(|e| ClientError::Deserialize {
        context: format!("product list from {context}"),
        source: e,
    })?;

    let total = raw.len();
    let products: Vec<Product> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping product that failed to decode");
                None
            }
        })
        .collect();

    let skipped = total - products.len();
    if skipped > 0 {
        tracing::warn!(skipped, total, "catalog contained undecodable products");
    }

    Ok(products)
}
