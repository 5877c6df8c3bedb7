//! Client-local wishlist: at most one entry per product code.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;

use crate::notice::{Notice, NoticeBoard};
use crate::products::{Product, Size};

pub(crate) const ADDED_NOTICE: &str = "Added to wishlist!";
pub(crate) const REMOVED_NOTICE: &str = "Removed from wishlist!";

/// A product snapshot taken at add time, with the sizes chosen then.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistEntry {
    pub product: Product,
    pub selected_sizes: Vec<Size>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishlistError {
    #[error("Please select at least one size before adding to wishlist.")]
    NoSizesSelected,

    /// Duplicate adds are rejected without user-facing feedback.
    #[error("product {product_code} is already in the wishlist")]
    AlreadyPresent { product_code: String },

    #[error("product {product_code} is sold out")]
    SoldOut { product_code: String },
}

#[derive(Debug, Clone)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
    codes: HashSet<String>,
    notices: NoticeBoard,
}

impl Default for Wishlist {
    fn default() -> Self {
        Self::new(crate::notice::DEFAULT_NOTICE_TTL)
    }
}

impl Wishlist {
    #[must_use]
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            codes: HashSet::new(),
            notices: NoticeBoard::new(notice_ttl),
        }
    }

    /// Appends a snapshot of `product` with `sizes`.
    ///
    /// # Errors
    ///
    /// - [`WishlistError::NoSizesSelected`] if `sizes` is empty.
    /// - [`WishlistError::AlreadyPresent`] if the product code is already listed.
    pub fn add(&mut self, product: &Product, sizes: &[Size]) -> Result<&WishlistEntry, WishlistError> {
        if sizes.is_empty() {
            return Err(WishlistError::NoSizesSelected);
        }
        if self.codes.contains(&product.product_code) {
            return Err(WishlistError::AlreadyPresent {
                product_code: product.product_code.clone(),
            });
        }

        self.codes.insert(product.product_code.clone());
        self.entries.push(WishlistEntry {
            product: product.clone(),
            selected_sizes: sizes.to_vec(),
        });
        self.notices.post(ADDED_NOTICE, Instant::now());
        tracing::debug!(product_code = %product.product_code, ?sizes, "wishlist add");

        let idx = self.entries.len() - 1;
        Ok(&self.entries[idx])
    }

    /// Removes the entry for `product_code`, returning whether one existed.
    /// The confirmation notice is posted either way.
    pub fn remove(&mut self, product_code: &str) -> bool {
        let removed = self.codes.remove(product_code);
        if removed {
            self.entries.retain(|e| e.product.product_code != product_code);
        }
        self.notices.post(REMOVED_NOTICE, Instant::now());
        tracing::debug!(product_code, removed, "wishlist remove");
        removed
    }

    #[must_use]
    pub fn contains(&self, product_code: &str) -> bool {
        self.codes.contains(product_code)
    }

    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The confirmation notice, if it has not expired yet.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    #[must_use]
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notices.current_at(now)
    }

    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.latest()
    }
}
