pub mod calculations;
pub mod models;
pub mod provider;
pub mod service;

pub use models::*;
pub use provider::{BracketCache, ProviderError, TaxRateProvider};
pub use service::TaxCalculator;
