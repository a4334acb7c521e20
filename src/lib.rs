//! Tax Updater Library
//!
//! Maintenance commands for the tax rate table of a commerce platform:
//! rewriting the percent (and the percent embedded in the code label) of
//! existing rates, selected by ID or by country code and current percent.

pub mod cli;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, ExitStatus, Result};
pub use modules::taxes;
