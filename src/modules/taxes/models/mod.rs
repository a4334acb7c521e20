pub mod rate_filter;
pub mod tax_rate;

pub use rate_filter::RateFilter;
pub use tax_rate::{RateId, TaxRate};
