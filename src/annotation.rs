//! Severity-classified diagnostic lines for the CI host.
//!
//! Annotations are rendered as workflow commands (`::notice::...`,
//! `::warning::...`) which the host picks up from the job log and surfaces
//! next to the run.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Notice,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Notice => "notice",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub severity: Severity,
    pub message: String,
}

impl Annotation {
    pub fn notice(message: impl Into<String>) -> Self {
        Self { severity: Severity::Notice, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    /// Render as a single workflow-command line.
    pub fn render(&self) -> String {
        format!("::{}::{}", self.severity, escape_data(&self.message))
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// One annotation is exactly one log line.
fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
