//! Plain-text rendering of catalog pages, product cards and the wishlist.
//!
//! Every renderer returns newline-terminated text ready to print.

use hivaas_core::{
    join_sizes, CardState, CatalogStore, Product, Size, SortOption, Wishlist, SELECT_SIZE_HINT,
};

pub(crate) const LOADING_MESSAGE: &str =
    "Loading products... Please wait. Our boutique is getting ready";
pub(crate) const NO_MATCHES_MESSAGE: &str = "No products found for selected filters.";

/// Shopper guide shown by the browse session's `guide` command.
pub(crate) const USER_GUIDE: &str = "You can use the filters at the top to narrow down \
products based on your preferences. Be sure to select the size(s) you're looking for in each \
product you like. You can click on a product image for a full screen view of that image. You \
can even choose multiple sizes in the same product. If you like several products, add them to \
your wishlist and send the entire wishlist to us via WhatsApp. You can also send a single \
product directly to WhatsApp. Happy shopping!";

fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One-line summary used in page listings.
pub(crate) fn product_line(product: &Product, in_wishlist: bool, currency: &str) -> String {
    let sizes: Vec<Size> = product.sizes.available().collect();
    let mut parts = vec![
        format!("[{}] {}", product.product_code, product.description),
        format!("{currency}{}", product.price),
        product.product_type.clone(),
    ];
    if sizes.is_empty() {
        parts.push("no sizes".to_string());
    } else {
        parts.push(format!("sizes: {}", join_sizes(&sizes)));
    }
    if product.is_sold_out() {
        parts.push("Sold Out".to_string());
    }
    if in_wishlist {
        parts.push("in wishlist".to_string());
    }
    parts.join(" | ")
}

/// Full card: details, carousel position, size picker and wishlist action.
pub(crate) fn card_detail(
    product: &Product,
    card: &CardState,
    in_wishlist: bool,
    currency: &str,
) -> String {
    let mut lines = vec![product.description.clone()];
    if product.is_sold_out() {
        lines.push("Sold Out".to_string());
    }
    lines.push(format!("Product Code: {}", product.product_code));
    lines.push(format!("Price: {currency}{}", product.price));
    lines.push(format!("Product Type: {}", product.product_type));

    lines.push(match card.current_image(product) {
        Some(url) => format!(
            "Image {} / {}: {url}",
            card.image_index() + 1,
            product.images().len()
        ),
        None => "No images available".to_string(),
    });

    let picker: Vec<String> = Size::ALL
        .iter()
        .map(|size| {
            if card.selected_sizes().contains(size) {
                format!("[{size}]")
            } else if CardState::can_toggle(product, *size) {
                size.to_string()
            } else {
                format!("~{size}~")
            }
        })
        .collect();
    lines.push(format!("Select Sizes: {}", picker.join(" ")));

    let action = if in_wishlist {
        "Remove from Wishlist"
    } else {
        "Add to Wishlist"
    };
    if card.wishlist_action_enabled(product) {
        lines.push(format!("Action: {action}"));
    } else {
        lines.push(format!("Action: {action} (disabled)"));
    }
    if card.selected_sizes().is_empty() && !product.is_sold_out() {
        lines.push(SELECT_SIZE_HINT.to_string());
    }
    block(lines)
}

/// Current catalog page, or the recommended fallback when nothing matches.
pub(crate) fn catalog_page(store: &CatalogStore, wishlist: &Wishlist, currency: &str) -> String {
    let Some(view) = store.view() else {
        return format!("{LOADING_MESSAGE}\n");
    };
    let listed = |product: &Product| {
        format!(
            "  {}",
            product_line(product, wishlist.contains(&product.product_code), currency)
        )
    };

    let mut lines: Vec<String> = store.filters().summary().into_iter().collect();
    if store.sort() != SortOption::None {
        lines.push(format!("Sort by Price: {}", store.sort()));
    }

    if view.is_empty() {
        lines.push(NO_MATCHES_MESSAGE.to_string());
        lines.push("Recommended Products".to_string());
        lines.extend(store.recommended().iter().map(listed));
        return block(lines);
    }

    lines.push(format!("Showing {} products", view.filtered_count));
    lines.extend(view.items.iter().copied().map(listed));
    lines.push(format!("Page {} of {}", view.page, view.total_pages));
    block(lines)
}

pub(crate) fn wishlist_panel(wishlist: &Wishlist) -> String {
    if wishlist.is_empty() {
        return "Your wishlist is empty.\n".to_string();
    }
    let mut lines = vec![format!("My Wishlist ({})", wishlist.len())];
    lines.extend(wishlist.entries().iter().map(|entry| {
        format!(
            "  {}: {} | Sizes: {}",
            entry.product.product_code,
            entry.product.description,
            join_sizes(&entry.selected_sizes)
        )
    }));
    block(lines)
}

pub(crate) fn types_list(types: &[String]) -> String {
    if types.is_empty() {
        return "No product types available.\n".to_string();
    }
    block(types.to_vec())
}
