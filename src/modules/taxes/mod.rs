pub mod commands;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{RateListCommand, RateUpdateCommand};
pub use models::{RateFilter, RateId, TaxRate};
pub use repositories::{MySqlRateStore, RateStore};
