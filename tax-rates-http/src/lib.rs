//! HTTP-backed [`tax_core::TaxRateProvider`].
//!
//! Fetches per-year bracket tables from
//! `GET {base_url}/tax-calculator/tax-year/{year}`, which answers `200` with
//! `{"tax_brackets": [{"min": .., "max": .., "rate": ..}, ..]}`.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tax_core::{BracketCache, TaxRateProvider};
//! use tax_rates_http::{HttpTaxClient, RateClientConfig};
//!
//! # async fn example() -> Result<(), tax_core::ProviderError> {
//! let cache = Arc::new(BracketCache::new());
//! let client = HttpTaxClient::new(RateClientConfig::default(), cache)?;
//!
//! let brackets = client.get_tax_brackets(2022).await?;
//! println!("{} brackets", brackets.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;

pub use client::HttpTaxClient;
pub use config::{
    DEFAULT_BACKOFF_BASE, DEFAULT_BACKOFF_MS, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_SECS, RateClientConfig,
};
