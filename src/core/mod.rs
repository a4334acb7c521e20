pub mod error;
pub mod exit_status;

pub use error::{AppError, Result};
pub use exit_status::ExitStatus;
