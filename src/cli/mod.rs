//! Command line surface: argument definitions and the console output sink

pub mod args;
pub mod output;

pub use args::{Cli, Commands, RateListArgs, RateUpdateArgs};
pub use output::{BufferedOutput, ConsoleOutput, Output, Severity};
