use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-bracket slice of a computed income tax.
///
/// Bands the income never reaches are still reported, with zero `taxable`
/// and `tax`, so the caller sees the full rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

/// Income tax for one year and income, broken down by band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_rate: Decimal,
    pub bands: Vec<TaxBandResult>,
}
