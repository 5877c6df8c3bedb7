//! Share text and deep-link construction for the messaging hand-off.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::products::{Product, Size};
use crate::wishlist::WishlistEntry;

pub const SHARE_GREETING: &str = "Hi, I'm interested in the following products:";
pub const DEFAULT_SHARE_PHONE: &str = "918073879674";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b9}";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn join_sizes(sizes: &[Size]) -> String {
    sizes
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"{code}: {description} ({currency}{price}) - Sizes: {sizes}"`
#[must_use]
pub fn share_line(entry: &WishlistEntry, currency: &str) -> String {
    format!(
        "{}: {} ({currency}{}) - Sizes: {}",
        entry.product.product_code,
        entry.product.description,
        entry.product.price,
        join_sizes(&entry.selected_sizes)
    )
}

/// Greeting line followed by one [`share_line`] per entry.
#[must_use]
pub fn to_share_text(entries: &[WishlistEntry], currency: &str) -> String {
    let lines: Vec<String> = entries.iter().map(|e| share_line(e, currency)).collect();
    format!("{SHARE_GREETING}\n{}", lines.join("\n"))
}

/// Message for sharing a single product straight from its card.
#[must_use]
pub fn product_share_text(product: &Product, sizes: &[Size]) -> String {
    format!(
        "Hi, I'm interested in Product Code: {} - {}. Sizes: {}",
        product.product_code,
        product.description,
        join_sizes(sizes)
    )
}

/// `https://wa.me/{phone}?text={encoded}`
#[must_use]
pub fn share_url(phone: &str, text: &str) -> String {
    let encoded = utf8_percent_encode(text, URI_COMPONENT);
    format!("https://wa.me/{phone}?text={encoded}")
}
