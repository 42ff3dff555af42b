//! HTTP rate provider: cache lookup, bounded retry, payload decoding.
//!
//! Status handling lives in [`tax_core::provider::classify_status`]; this
//! module only maps transport outcomes onto [`ProviderError`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tax_core::provider::{StatusClass, classify_status};
use tax_core::{BracketCache, ProviderError, TaxBracket, TaxBracketsResponse, TaxRateProvider};
use tracing::{debug, warn};

use crate::config::RateClientConfig;

const USER_AGENT_VALUE: &str = concat!("tax-rates-http/", env!("CARGO_PKG_VERSION"));

/// [`TaxRateProvider`] that fetches bracket tables from the upstream rate
/// source and memoizes them in a shared [`BracketCache`].
///
/// Dropping the future returned by `get_tax_brackets` aborts both the
/// in-flight request and any pending backoff sleep.
#[derive(Debug, Clone)]
pub struct HttpTaxClient {
    client: reqwest::Client,
    base_url: String,
    cache: Arc<BracketCache>,
    config: RateClientConfig,
}

impl HttpTaxClient {
    /// Build a client around `cache`.
    ///
    /// # Errors
    /// [`ProviderError::Configuration`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        config: RateClientConfig,
        cache: Arc<BracketCache>,
    ) -> Result<Self, ProviderError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ProviderError::Configuration {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            cache,
            config,
        })
    }

    pub fn cache(&self) -> &Arc<BracketCache> {
        &self.cache
    }

    fn year_url(&self, year: i32) -> String {
        format!("{}/tax-calculator/tax-year/{}", self.base_url, year)
    }

    /// One request/response exchange, without retry or caching.
    async fn fetch_once(
        &self,
        url: &str,
        year: i32,
    ) -> Result<Arc<[TaxBracket]>, ProviderError> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status().as_u16();
        if classify_status(status) != StatusClass::Success {
            return Err(ProviderError::UpstreamStatus { status });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let payload: TaxBracketsResponse =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode {
                message: e.to_string(),
            })?;

        if payload.tax_brackets.is_empty() {
            return Err(ProviderError::EmptyBrackets { year });
        }

        if let Some(index) = payload.tax_brackets.iter().position(|b| !b.is_well_formed()) {
            return Err(ProviderError::Decode {
                message: format!("bracket {index} out of range for year {year}"),
            });
        }

        Ok(Arc::from(payload.tax_brackets))
    }
}

#[async_trait]
impl TaxRateProvider for HttpTaxClient {
    async fn get_tax_brackets(&self, year: i32) -> Result<Arc<[TaxBracket]>, ProviderError> {
        if let Some(brackets) = self.cache.get(year) {
            debug!(year, "tax brackets served from cache");
            return Ok(brackets);
        }

        let url = self.year_url(year);
        let attempts = self.config.attempts();
        let mut last_error = None;

        for attempt in 0..attempts {
            debug!(url = %url, attempt, "fetching tax brackets");

            match self.fetch_once(&url, year).await {
                Ok(brackets) => {
                    self.cache.set(year, Arc::clone(&brackets));
                    return Ok(brackets);
                }
                Err(e) if e.is_retryable() => {
                    if attempt + 1 < attempts {
                        let backoff = self.config.backoff_after(attempt);
                        warn!(
                            error = %e,
                            year,
                            attempt,
                            max_retries = attempts,
                            backoff_ms = backoff.as_millis(),
                            "retrying tax bracket fetch"
                        );
                        tokio::time::sleep(backoff).await;
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::Configuration {
            message: "no fetch attempts were made".to_string(),
        }))
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        message: err.to_string(),
    }
}
