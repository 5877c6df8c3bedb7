//! One-shot catalog load into a [`CatalogStore`].

use hivaas_core::CatalogStore;

use super::CatalogClient;

/// Marks the store as loading, fetches once, and settles the store with the
/// outcome. A failure keeps whatever collection the store already held.
///
/// Returns `true` if the collection was replaced.
pub async fn load_catalog(store: &mut CatalogStore, client: &CatalogClient, catalog_url: &str) -> bool {
    store.begin_load();
    let result = client.fetch_products(catalog_url).await;
    store.settle(result)
}
