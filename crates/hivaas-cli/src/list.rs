//! Non-interactive `list` and `types` commands.

use hivaas_core::{AppConfig, CatalogStore, Product, Size, SortOption, Wishlist};
use serde_json::json;

use crate::render;

#[derive(Debug, Clone, Default)]
pub(crate) struct ListArgs {
    pub(crate) sizes: Vec<Size>,
    pub(crate) types: Vec<String>,
    pub(crate) keyword: Option<String>,
    pub(crate) sort: SortOption,
    pub(crate) page: usize,
    pub(crate) json: bool,
}

/// Applies `args` to the store's filters in the same order a shopper would.
pub(crate) fn apply_filters(store: &mut CatalogStore, args: &ListArgs) {
    for size in &args.sizes {
        if !store.filters().sizes.contains(size) {
            store.toggle_size_filter(*size);
        }
    }
    for product_type in &args.types {
        if !store.types().contains(product_type) {
            tracing::warn!(%product_type, "type not present in catalog");
        }
        if !store.filters().types.contains(product_type) {
            store.toggle_type_filter(product_type);
        }
    }
    if let Some(keyword) = &args.keyword {
        store.set_keyword(keyword);
    }
    store.set_sort(args.sort);
    store.go_to_page(args.page);
}

/// Prints one catalog page.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub(crate) fn run_list(
    store: &mut CatalogStore,
    config: &AppConfig,
    args: &ListArgs,
) -> anyhow::Result<()> {
    apply_filters(store, args);

    if args.json {
        let Some(view) = store.view() else {
            return Ok(());
        };
        let recommended: &[Product] = if view.is_empty() {
            store.recommended()
        } else {
            &[]
        };
        let out = json!({
            "filters": store.filters().summary(),
            "sort": store.sort(),
            "page": view.page,
            "total_pages": view.total_pages,
            "filtered_count": view.filtered_count,
            "items": view.items,
            "recommended": recommended,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!(
        "{}",
        render::catalog_page(store, &Wishlist::new(config.notice_ttl()), &config.currency_symbol)
    );
    Ok(())
}

pub(crate) fn run_types(store: &CatalogStore) {
    print!("{}", render::types_list(store.types()));
}
