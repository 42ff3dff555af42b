mod tax_bracket;
mod tax_result;

pub use tax_bracket::{TaxBracket, TaxBracketsResponse};
pub use tax_result::{IncomeTaxResult, TaxBandResult};
