//! Line oriented, severity tagged command output

use colored::*;
use std::io::{self, Write};

use crate::core::Result;

/// Severity class of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Comment,
    Warning,
    Error,
    /// Uncolored text, e.g. machine readable payloads
    Plain,
}

/// Sink for the user facing lines a command produces
pub trait Output: Send {
    fn write_line(&mut self, severity: Severity, message: &str) -> Result<()>;

    fn info(&mut self, message: &str) -> Result<()> {
        self.write_line(Severity::Info, message)
    }

    fn comment(&mut self, message: &str) -> Result<()> {
        self.write_line(Severity::Comment, message)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.write_line(Severity::Warning, message)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.write_line(Severity::Error, message)
    }
}

/// Terminal output: info/comment/plain on stdout, warning/error on stderr
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn write_line(&mut self, severity: Severity, message: &str) -> Result<()> {
        match severity {
            Severity::Info => writeln!(io::stdout().lock(), "{}", message.green())?,
            Severity::Comment => writeln!(io::stdout().lock(), "{}", message.yellow())?,
            Severity::Plain => writeln!(io::stdout().lock(), "{}", message)?,
            Severity::Warning => {
                writeln!(io::stderr().lock(), "{}", message.black().on_yellow())?
            }
            Severity::Error => writeln!(io::stderr().lock(), "{}", message.white().on_red())?,
        }
        Ok(())
    }
}

/// In-memory output that records every line
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    lines: Vec<(Severity, String)>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Severity, String)] {
        &self.lines
    }

    /// Messages of one severity, in emission order
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Output for BufferedOutput {
    fn write_line(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.lines.push((severity, message.to_string()));
        Ok(())
    }
}
