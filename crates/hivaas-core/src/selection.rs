//! Per-card selection and presentation state.
//!
//! Each product card tracks its chosen sizes, carousel position, and whether
//! the full-size image modal is open. Cards are independent of each other.

use std::collections::HashMap;

use crate::products::{Product, Size};
use crate::share::product_share_text;
use crate::wishlist::{Wishlist, WishlistError};

pub const SELECT_SIZE_HINT: &str =
    "Select at least one size to add the product to the wishlist or to send it to us on WhatsApp.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    selected_sizes: Vec<Size>,
    image_index: usize,
    modal_open: bool,
}

impl CardState {
    #[must_use]
    pub fn selected_sizes(&self) -> &[Size] {
        &self.selected_sizes
    }

    /// Only available sizes on in-stock products can be picked.
    #[must_use]
    pub fn can_toggle(product: &Product, size: Size) -> bool {
        !product.is_sold_out() && product.has_size(size)
    }

    /// Toggles `size` in the selection. Returns `false` (and changes nothing)
    /// when the size cannot be picked.
    pub fn toggle_size(&mut self, product: &Product, size: Size) -> bool {
        if !Self::can_toggle(product, size) {
            return false;
        }
        if let Some(pos) = self.selected_sizes.iter().position(|s| *s == size) {
            self.selected_sizes.remove(pos);
        } else {
            self.selected_sizes.push(size);
        }
        true
    }

    #[must_use]
    pub fn wishlist_action_enabled(&self, product: &Product) -> bool {
        !product.is_sold_out() && !self.selected_sizes.is_empty()
    }

    /// Adds the product with the current selection, or removes it (and clears
    /// the selection) when it is already in the wishlist.
    ///
    /// # Errors
    ///
    /// - [`WishlistError::SoldOut`] for sold-out products.
    /// - [`WishlistError::NoSizesSelected`] when nothing is selected.
    /// - Any rejection from [`Wishlist::add`].
    pub fn handle_wishlist_action(
        &mut self,
        product: &Product,
        wishlist: &mut Wishlist,
    ) -> Result<CardOutcome, WishlistError> {
        if product.is_sold_out() {
            return Err(WishlistError::SoldOut {
                product_code: product.product_code.clone(),
            });
        }
        if self.selected_sizes.is_empty() {
            return Err(WishlistError::NoSizesSelected);
        }

        if wishlist.contains(&product.product_code) {
            wishlist.remove(&product.product_code);
            self.selected_sizes.clear();
            Ok(CardOutcome::Removed)
        } else {
            wishlist.add(product, &self.selected_sizes)?;
            Ok(CardOutcome::Added)
        }
    }

    /// Single-product share message for the current selection.
    ///
    /// # Errors
    ///
    /// Same gating as [`CardState::handle_wishlist_action`].
    pub fn share_text(&self, product: &Product) -> Result<String, WishlistError> {
        if product.is_sold_out() {
            return Err(WishlistError::SoldOut {
                product_code: product.product_code.clone(),
            });
        }
        if self.selected_sizes.is_empty() {
            return Err(WishlistError::NoSizesSelected);
        }
        Ok(product_share_text(product, &self.selected_sizes))
    }

    #[must_use]
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    #[must_use]
    pub fn current_image<'a>(&self, product: &'a Product) -> Option<&'a str> {
        product.images().get(self.image_index).copied()
    }

    pub fn next_image(&mut self, product: &Product) {
        let count = product.images().len();
        if count > 0 {
            self.image_index = (self.image_index + 1) % count;
        }
    }

    pub fn prev_image(&mut self, product: &Product) {
        let count = product.images().len();
        if count > 0 {
            self.image_index = if self.image_index == 0 {
                count - 1
            } else {
                self.image_index - 1
            };
        }
    }

    /// Opens the full-size view of the current image. No-op without images.
    pub fn open_image<'a>(&mut self, product: &'a Product) -> Option<&'a str> {
        let image = self.current_image(product);
        self.modal_open = image.is_some();
        image
    }

    pub fn close_image(&mut self) {
        self.modal_open = false;
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}

/// Card state for every product that has been interacted with.
#[derive(Debug, Clone, Default)]
pub struct Selections {
    cards: HashMap<String, CardState>,
}

impl Selections {
    /// State for `product_code`, or the initial state if untouched.
    #[must_use]
    pub fn card(&self, product_code: &str) -> CardState {
        self.cards.get(product_code).cloned().unwrap_or_default()
    }

    pub fn card_mut(&mut self, product_code: &str) -> &mut CardState {
        self.cards.entry(product_code.to_string()).or_default()
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
