mod app_config;
mod catalog;
mod config;
mod notice;
mod products;
mod selection;
mod share;
mod wishlist;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{
    derive_view, distinct_types, recommended, sort_products, total_pages, CatalogStore, CatalogView, FilterState,
    LoadState, SortOption, DEFAULT_PAGE_SIZE, DEFAULT_RECOMMENDED_COUNT,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use notice::{Notice, NoticeBoard, DEFAULT_NOTICE_TTL};
pub use products::{Product, Size, SizeAvailability};
pub use selection::{CardOutcome, CardState, Selections, SELECT_SIZE_HINT};
pub use share::{
    join_sizes, product_share_text, share_line, share_url, to_share_text,
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_SHARE_PHONE, SHARE_GREETING,
};
pub use wishlist::{Wishlist, WishlistEntry, WishlistError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown size label: {0}")]
    UnknownSize(String),

    #[error("unknown sort option: {0}")]
    UnknownSort(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
