pub mod client;
pub mod error;
pub mod parse;

pub use client::{load_catalog, CatalogClient};
pub use error::ClientError;
pub use parse::parse_products;
