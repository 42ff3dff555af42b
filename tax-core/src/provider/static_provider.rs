use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::rate_provider::{ProviderError, TaxRateProvider};
use crate::models::TaxBracket;

/// [`TaxRateProvider`] backed by a fixed, in-memory table.
///
/// Useful wherever bracket tables are known up front and no network source
/// is wanted, most commonly in tests. Every call is counted so callers can
/// assert on how often the provider was consulted.
#[derive(Debug, Default)]
pub struct StaticRateProvider {
    years: HashMap<i32, Arc<[TaxBracket]>>,
    calls: AtomicUsize,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bracket list for `year`, replacing any previous one.
    pub fn with_year(
        mut self,
        year: i32,
        brackets: Vec<TaxBracket>,
    ) -> Self {
        self.years.insert(year, Arc::from(brackets));
        self
    }

    /// Number of `get_tax_brackets` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaxRateProvider for StaticRateProvider {
    async fn get_tax_brackets(&self, year: i32) -> Result<Arc<[TaxBracket]>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let brackets = self
            .years
            .get(&year)
            .ok_or(ProviderError::YearNotFound { year })?;

        if brackets.is_empty() {
            return Err(ProviderError::EmptyBrackets { year });
        }

        Ok(Arc::clone(brackets))
    }
}
