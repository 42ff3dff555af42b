use std::sync::Arc;

use tax_core::{BracketCache, IncomeTaxResult, ProviderError, TaxCalculator};
use tax_rates_http::{HttpTaxClient, RateClientConfig};
use thiserror::Error;
use tracing::debug;

use crate::validation::{ValidationError, validate_request};

/// Exit code for rejected input.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code when the rate source cannot supply brackets.
pub const EXIT_UPSTREAM: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("upstream error: {0}")]
    Upstream(#[from] ProviderError),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => EXIT_INVALID_INPUT,
            Self::Upstream(_) => EXIT_UPSTREAM,
        }
    }
}

/// Wire a calculator to the HTTP rate source with a fresh, process-wide
/// bracket cache.
pub fn build_calculator(config: RateClientConfig) -> Result<TaxCalculator, ProviderError> {
    debug!(base_url = %config.base_url, max_retries = config.max_retries, "configuring rate client");

    let cache = Arc::new(BracketCache::new());
    let client = HttpTaxClient::new(config, cache)?;

    Ok(TaxCalculator::new(Arc::new(client)))
}

/// Validate raw inputs, then compute the tax.
pub async fn compute(
    calculator: &TaxCalculator,
    year: &str,
    salary: &str,
) -> Result<IncomeTaxResult, AppError> {
    let (year, income) = validate_request(year, salary)?;

    Ok(calculator.calculate_tax(year, income).await?)
}

/// Encode a result as JSON, optionally pretty-printed.
pub fn render(
    result: &IncomeTaxResult,
    pretty: bool,
) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::TaxBracket;
    use tax_core::provider::StaticRateProvider;

    use super::*;

    fn calculator() -> (TaxCalculator, Arc<StaticRateProvider>) {
        let provider = Arc::new(StaticRateProvider::new().with_year(
            2022,
            vec![TaxBracket {
                min: dec!(0),
                max: Some(dec!(50000)),
                rate: dec!(0.15),
            }],
        ));
        (TaxCalculator::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn computes_valid_request() {
        let (calculator, _) = calculator();

        let result = compute(&calculator, "2022", "40000").await.unwrap();

        assert_eq!(result.total_tax, dec!(6000));
        assert_eq!(result.effective_rate, dec!(0.15));
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_provider() {
        let (calculator, provider) = calculator();

        let err = compute(&calculator, "2018", "40000").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ValidationError::YearOutOfRange { .. })));
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_upstream() {
        let (calculator, _) = calculator();

        let err = compute(&calculator, "2021", "40000").await.unwrap_err();

        assert_eq!(err.exit_code(), EXIT_UPSTREAM);
        assert_eq!(
            err.to_string(),
            "upstream error: no tax brackets known for year 2021"
        );
    }

    #[tokio::test]
    async fn render_compact_json() {
        let (calculator, _) = calculator();
        let result = compute(&calculator, "2022", "40000").await.unwrap();

        let json = render(&result, false).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"total_tax\":6000.0"));
    }
}
