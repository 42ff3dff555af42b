pub mod cache;
pub mod rate_provider;
pub mod static_provider;

pub use cache::BracketCache;
pub use rate_provider::{ProviderError, StatusClass, TaxRateProvider, classify_status};
pub use static_provider::StaticRateProvider;
