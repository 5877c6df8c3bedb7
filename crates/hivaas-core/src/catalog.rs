//! Catalog store and the filter → sort → paginate derivation.
//!
//! [`derive_view`] is pure; [`CatalogStore`] owns the session state that
//! feeds it and applies the page-reset rules on every filter change.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::products::{Product, Size};
use crate::CoreError;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_RECOMMENDED_COUNT: usize = 5;

/// Price ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::None => write!(f, "None"),
            SortOption::PriceAscending => write!(f, "Low to High"),
            SortOption::PriceDescending => write!(f, "High to Low"),
        }
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SortOption::None),
            "low-to-high" | "lowtohigh" | "asc" | "price-ascending" => {
                Ok(SortOption::PriceAscending)
            }
            "high-to-low" | "hightolow" | "desc" | "price-descending" => {
                Ok(SortOption::PriceDescending)
            }
            _ => Err(CoreError::UnknownSort(s.to_string())),
        }
    }
}

/// Active catalog filters. Selected sizes and types keep the order in which
/// they were toggled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub sizes: Vec<Size>,
    pub types: Vec<String>,
    pub keyword: String,
}

impl FilterState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.sizes.is_empty() || !self.types.is_empty() || !self.keyword.is_empty()
    }

    pub fn toggle_size(&mut self, size: Size) {
        toggle(&mut self.sizes, size);
    }

    pub fn toggle_type(&mut self, product_type: &str) {
        toggle(&mut self.types, product_type.to_string());
    }

    /// All three predicates AND together; sizes and types match on any.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let sizes_match =
            self.sizes.is_empty() || self.sizes.iter().any(|size| product.has_size(*size));

        let types_match = self.types.is_empty() || self.types.contains(&product.product_type);

        // Only the emptiness check trims; the needle itself is used as typed.
        let keyword_match = self.keyword.trim().is_empty()
            || product
                .description
                .to_lowercase()
                .contains(&self.keyword.to_lowercase());

        sizes_match && types_match && keyword_match
    }

    /// Human-readable summary of the active filters, e.g.
    /// `"Size: M, L | Type: Saree"`. `None` when nothing is active.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.sizes.is_empty() {
            let labels: Vec<&str> = self.sizes.iter().map(|s| s.label()).collect();
            parts.push(format!("Size: {}", labels.join(", ")));
        }
        if !self.types.is_empty() {
            parts.push(format!("Type: {}", self.types.join(", ")));
        }
        if !self.keyword.is_empty() {
            parts.push(format!("Keyword: {}", self.keyword));
        }
        (!parts.is_empty()).then(|| parts.join(" | "))
    }
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(pos) = list.iter().position(|existing| *existing == item) {
        list.remove(pos);
    } else {
        list.push(item);
    }
}

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a Product>,
    /// Number of products matching the filters across all pages.
    pub filtered_count: usize,
    /// 1-indexed page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
}

impl CatalogView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `max(1, ceil(count / page_size))`. A zero page size is treated as 1.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Filters, sorts and slices `products` into a single page.
///
/// `page` is 1-indexed and clamped into `[1, total_pages]`. Equal prices keep
/// their relative collection order.
#[must_use]
pub fn derive_view<'a>(
    products: &'a [Product],
    filters: &FilterState,
    sort: SortOption,
    page: usize,
    page_size: usize,
) -> CatalogView<'a> {
    let page_size = page_size.max(1);

    let mut filtered: Vec<&Product> = products.iter().filter(|p| filters.matches(p)).collect();
    sort_products(&mut filtered, sort);

    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = page.clamp(1, total_pages);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    CatalogView {
        items,
        filtered_count,
        page,
        total_pages,
    }
}

/// Stable price sort; [`SortOption::None`] leaves the order untouched.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::None => {}
        SortOption::PriceAscending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDescending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// Distinct non-empty product types in first-seen order.
#[must_use]
pub fn distinct_types(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.product_type.as_str())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// The fallback shown when no product matches: the head of the unfiltered
/// collection, in received order.
#[must_use]
pub fn recommended(products: &[Product], count: usize) -> &[Product] {
    &products[..count.min(products.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been attempted yet.
    Idle,
    Loading,
    Settled,
}

/// Session-scoped catalog state.
///
/// The product collection is replaced only by a successful [`settle`]; every
/// filter or sort mutation resets the page to 1.
///
/// [`settle`]: CatalogStore::settle
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    types: Vec<String>,
    filters: FilterState,
    sort: SortOption,
    page: usize,
    page_size: usize,
    recommended_count: usize,
    load_state: LoadState,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_RECOMMENDED_COUNT)
    }
}

impl CatalogStore {
    #[must_use]
    pub fn new(page_size: usize, recommended_count: usize) -> Self {
        Self {
            products: Vec::new(),
            types: Vec::new(),
            filters: FilterState::default(),
            sort: SortOption::None,
            page: 1,
            page_size: page_size.max(1),
            recommended_count,
            load_state: LoadState::Idle,
        }
    }

    /// Builds a settled store around an already-fetched collection.
    #[must_use]
    pub fn with_products(products: Vec<Product>, page_size: usize, recommended_count: usize) -> Self {
        let mut store = Self::new(page_size, recommended_count);
        store.replace_products(products);
        store.load_state = LoadState::Settled;
        store
    }

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Settles an in-flight load. On failure the previous collection is kept
    /// and the error is only logged.
    ///
    /// Returns `true` if the collection was replaced.
    pub fn settle<E: fmt::Display>(&mut self, result: Result<Vec<Product>, E>) -> bool {
        self.load_state = LoadState::Settled;
        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.replace_products(products);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching products");
                false
            }
        }
    }

    fn replace_products(&mut self, products: Vec<Product>) {
        self.types = distinct_types(&products);
        self.products = products;
        self.page = 1;
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, product_code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_code == product_code)
    }

    /// Type-filter choices, derived from the full collection.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn toggle_size_filter(&mut self, size: Size) {
        self.filters.toggle_size(size);
        self.page = 1;
    }

    pub fn toggle_type_filter(&mut self, product_type: &str) {
        self.filters.toggle_type(product_type);
        self.page = 1;
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.filters.keyword = keyword.to_string();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortOption::None;
        self.page = 1;
    }

    fn total_pages(&self) -> usize {
        let count = self
            .products
            .iter()
            .filter(|p| self.filters.matches(p))
            .count();
        total_pages(count, self.page_size)
    }

    /// Moves to `page`, clamped to the current page range. Returns the page
    /// now selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// The current page, or `None` while a load is in flight.
    #[must_use]
    pub fn view(&self) -> Option<CatalogView<'_>> {
        if self.is_loading() {
            return None;
        }
        Some(derive_view(
            &self.products,
            &self.filters,
            self.sort,
            self.page,
            self.page_size,
        ))
    }

    #[must_use]
    pub fn recommended(&self) -> &[Product] {
        recommended(&self.products, self.recommended_count)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
