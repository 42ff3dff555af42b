use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive band as published by the upstream rate source.
///
/// `max` may be absent, `null` or `0` on the wire; all three mean the band
/// has no upper bound. Use [`TaxBracket::upper_bound`] rather than reading
/// `max` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
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
}

impl TaxBracket {
    /// Upper edge of the band, or `None` for the open-ended top bracket.
    pub fn upper_bound(&self) -> Option<Decimal> {
        self.max.filter(|max| *max > Decimal::ZERO)
    }

    /// Check if this is the open-ended top bracket.
    pub fn is_open_ended(&self) -> bool {
        self.upper_bound().is_none()
    }

    /// Non-negative edges and a rate in `[0, 1]`.
    pub fn is_well_formed(&self) -> bool {
        self.min >= Decimal::ZERO
            && self.max.is_none_or(|max| max >= Decimal::ZERO)
            && (Decimal::ZERO..=Decimal::ONE).contains(&self.rate)
    }
}

/// Body of `GET /tax-calculator/tax-year/{year}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketsResponse {
    pub tax_brackets: Vec<TaxBracket>,
}
