pub mod rate_label;

pub use rate_label::{format_percent, percent_label, rewrite_code};
