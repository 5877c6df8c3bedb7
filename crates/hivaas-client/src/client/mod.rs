//! HTTP client for the catalog's product list endpoint.

mod load;

use std::time::Duration;

use hivaas_core::{AppConfig, Product};
use reqwest::Client;

use crate::error::ClientError;
use crate::parse::parse_products;

pub use load::load_catalog;

/// Fetches the product collection with a single GET.
///
/// There is no retry policy: a failed request is reported once and left to
/// the caller. Non-2xx statuses and undecodable bodies surface as typed errors.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given `User-Agent`.
    ///
    /// `timeout_secs` of `None` leaves requests without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: Option<u64>, user_agent: &str) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(config.request_timeout_secs, &config.user_agent)
    }

    /// Fetches and decodes the product list at `catalog_url`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidCatalogUrl`] — not an absolute http(s) URL.
    /// - [`ClientError::NotFound`] — HTTP 404.
    /// - [`ClientError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::Deserialize`] — body is not a JSON array.
    pub async fn fetch_products(&self, catalog_url: &str) -> Result<Vec<Product>, ClientError> {
        let url = Self::catalog_url(catalog_url)?;
        tracing::debug!(%url, "fetching catalog");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { url });
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_products(&body, &url)
    }

    /// Validates `raw` as an absolute http(s) URL.
    fn catalog_url(raw: &str) -> Result<String, ClientError> {
        let url = reqwest::Url::parse(raw.trim()).map_err(|e| ClientError::InvalidCatalogUrl {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url.to_string()),
            other => Err(ClientError::InvalidCatalogUrl {
                url: raw.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
