//! Year-and-income entry point: resolve the schedule, then apply it.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::calculations::IncomeTaxWorksheet;
use crate::models::IncomeTaxResult;
use crate::provider::{ProviderError, TaxRateProvider};

/// Computes income tax using brackets from a [`TaxRateProvider`].
///
/// Inputs are assumed already validated by the caller (supported year,
/// non-negative income).
#[derive(Clone)]
pub struct TaxCalculator {
    provider: Arc<dyn TaxRateProvider>,
}

impl TaxCalculator {
    pub fn new(provider: Arc<dyn TaxRateProvider>) -> Self {
        Self { provider }
    }

    /// Resolves the brackets for `year` and computes the tax on `income`.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`] from the rate provider is returned unchanged;
    /// no partial result is produced.
    pub async fn calculate_tax(
        &self,
        year: i32,
        income: Decimal,
    ) -> Result<IncomeTaxResult, ProviderError> {
        let brackets = self.provider.get_tax_brackets(year).await?;

        Ok(IncomeTaxWorksheet::new(&brackets).calculate(year, income))
    }
}
