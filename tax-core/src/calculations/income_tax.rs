//! Progressive income tax over a year's bracket schedule.
//!
//! Each bracket taxes the slice of income that falls between its `min` and
//! its upper bound (or everything above `min` for the open-ended top
//! bracket). Per-band amounts are rounded to cents for presentation, while
//! the grand total is accumulated from the unrounded band taxes and rounded
//! once at the end.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxBracket;
//! use tax_core::calculations::IncomeTaxWorksheet;
//!
//! let brackets = vec![
//!     TaxBracket { min: dec!(0), max: Some(dec!(50000)), rate: dec!(0.10) },
//!     TaxBracket { min: dec!(50000), max: Some(dec!(100000)), rate: dec!(0.20) },
//!     TaxBracket { min: dec!(100000), max: None, rate: dec!(0.30) },
//! ];
//!
//! let result = IncomeTaxWorksheet::new(&brackets).calculate(2022, dec!(120000));
//!
//! assert_eq!(result.total_tax, dec!(21000));
//! assert_eq!(result.effective_rate, dec!(0.18));
//! assert_eq!(result.bands[2].taxable, dec!(20000));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{IncomeTaxResult, TaxBandResult, TaxBracket};

/// Applies a bracket schedule to an income.
///
/// Brackets are expected in ascending `min` order, contiguous and
/// non-overlapping, with rates in `[0, 1]`; they are not re-validated here.
/// Out-of-range input saturates at [`Decimal::MAX`] instead of panicking.
/// The worksheet holds no state beyond the borrowed schedule and can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct IncomeTaxWorksheet<'a> {
    tax_brackets: &'a [TaxBracket],
}

impl<'a> IncomeTaxWorksheet<'a> {
    pub fn new(tax_brackets: &'a [TaxBracket]) -> Self {
        Self { tax_brackets }
    }

    /// Computes the band-by-band breakdown and totals for `income`.
    ///
    /// Every bracket yields exactly one band, in input order.
    pub fn calculate(
        &self,
        year: i32,
        income: Decimal,
    ) -> IncomeTaxResult {
        let mut total_tax = Decimal::ZERO;
        let mut bands = Vec::with_capacity(self.tax_brackets.len());

        for bracket in self.tax_brackets {
            let taxable = self.taxable_in_band(bracket, income);
            let tax = taxable.saturating_mul(bracket.rate);
            total_tax = total_tax.saturating_add(tax);

            bands.push(TaxBandResult {
                min: bracket.min,
                max: bracket.upper_bound(),
                rate: bracket.rate,
                taxable: round_half_up(taxable),
                tax: round_half_up(tax),
            });
        }

        IncomeTaxResult {
            year,
            income: round_half_up(income),
            total_tax: round_half_up(total_tax),
            effective_rate: self.effective_rate(total_tax, income),
            bands,
        }
    }

    /// Portion of `income` falling inside `bracket`, unrounded.
    ///
    /// The lower edge is exclusive: an income equal to `min` does not reach
    /// the band.
    fn taxable_in_band(
        &self,
        bracket: &TaxBracket,
        income: Decimal,
    ) -> Decimal {
        if income <= bracket.min {
            return Decimal::ZERO;
        }

        let taxable = match bracket.upper_bound() {
            Some(upper) => income.min(upper).saturating_sub(bracket.min),
            None => income.saturating_sub(bracket.min),
        };

        // Overlapping or unordered upstream data must never produce a negative slice.
        taxable.max(Decimal::ZERO)
    }

    /// Total tax over income, rounded; zero when there is no income.
    fn effective_rate(
        &self,
        total_tax: Decimal,
        income: Decimal,
    ) -> Decimal {
        if income > Decimal::ZERO {
            total_tax
                .checked_div(income)
                .map_or(Decimal::MAX, round_half_up)
        } else {
            Decimal::ZERO
        }
    }
}

/// Shorthand for `IncomeTaxWorksheet::new(brackets).calculate(year, income)`.
pub fn calculate_tax(
    year: i32,
    brackets: &[TaxBracket],
    income: Decimal,
) -> IncomeTaxResult {
    IncomeTaxWorksheet::new(brackets).calculate(year, income)
}
