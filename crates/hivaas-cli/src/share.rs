//! Non-interactive `share` command: builds a wishlist from `CODE=SIZES`
//! items and prints the message and link.

use anyhow::{bail, Context};
use hivaas_core::{share_url, to_share_text, AppConfig, CardState, CatalogStore, Size, Wishlist, WishlistError};

/// Parses `HV101=M,L` into a product code and sizes.
pub(crate) fn parse_item(raw: &str) -> anyhow::Result<(String, Vec<Size>)> {
    let (code, sizes) = raw
        .split_once('=')
        .with_context(|| format!("item `{raw}` must look like CODE=SIZE[,SIZE...]"))?;
    let code = code.trim();
    if code.is_empty() {
        bail!("item `{raw}` has an empty product code");
    }
    let mut parsed: Vec<Size> = Vec::new();
    for label in sizes.split(',').filter(|s| !s.trim().is_empty()) {
        let size: Size = label
            .parse()
            .with_context(|| format!("item `{raw}` has an unknown size"))?;
        // Repeats would toggle the size back off.
        if !parsed.contains(&size) {
            parsed.push(size);
        }
    }
    let sizes = parsed;
    if sizes.is_empty() {
        bail!("{}", WishlistError::NoSizesSelected);
    }
    Ok((code.to_string(), sizes))
}

/// Builds the wishlist for `items` against the loaded catalog.
pub(crate) fn build_wishlist(
    store: &CatalogStore,
    config: &AppConfig,
    items: &[String],
) -> anyhow::Result<Wishlist> {
    let mut wishlist = Wishlist::new(config.notice_ttl());
    for raw in items {
        let (code, sizes) = parse_item(raw)?;
        let product = store
            .product(&code)
            .with_context(|| format!("no product with code {code}"))?;

        if wishlist.contains(&code) {
            tracing::warn!(product_code = %code, "duplicate item ignored");
            continue;
        }

        let mut card = CardState::default();
        for size in sizes {
            if !card.toggle_size(product, size) {
                bail!("size {size} is not available for {code}");
            }
        }
        card.handle_wishlist_action(product, &mut wishlist)?;
    }
    Ok(wishlist)
}

/// # Errors
///
/// Fails on malformed items, unknown codes, sold-out products and
/// unavailable sizes.
pub(crate) fn run_share(
    store: &CatalogStore,
    config: &AppConfig,
    items: &[String],
) -> anyhow::Result<()> {
    let wishlist = build_wishlist(store, config, items)?;
    let text = to_share_text(wishlist.entries(), &config.currency_symbol);
    println!("{text}");
    println!();
    println!("{}", share_url(&config.share_phone, &text));
    Ok(())
}
