use std::fmt;
use std::process::ExitStatus;

use crate::error::AppError;
use crate::utils::display_command;

/// The scanner subcommand every invocation runs.
pub const SCAN_SUBCOMMAND: &str = "scan";

/// Output format requested through the `format` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Default,
    Json,
}

impl OutputFormat {
    /// Only the exact literal `json` selects JSON output.
    pub fn from_input(value: &str) -> Self {
        if value == "json" { OutputFormat::Json } else { OutputFormat::Default }
    }

    pub fn flag(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Default => None,
            OutputFormat::Json => Some("--json"),
        }
    }
}

/// The five positional inputs of one action run, in their fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationInputs {
    pub path: String,
    pub repo: Option<String>,
    pub image: Option<String>,
    pub force: String,
    pub format: String,
}

impl InvocationInputs {
    pub fn new(
        path: impl Into<String>,
        repo: impl Into<String>,
        image: impl Into<String>,
        force: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            repo: non_empty(repo.into()),
            image: non_empty(image.into()),
            force: force.into(),
            format: format.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.is_empty() {
            return Err(AppError::MissingPath);
        }
        Ok(())
    }

    /// Break-glass mode is on only for the exact literal `true`.
    pub fn force_enabled(&self) -> bool {
        self.force == "true"
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_input(&self.format)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Program plus arguments, kept as discrete tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Every token including the program name.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_command(self.tokens()))
    }
}

/// Outcome of running the scanner: its exit code and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    pub code: i32,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl From<ExitStatus> for ExecutionResult {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExecutionResult { code };
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExecutionResult { code: 128 + signal };
            }
        }

        ExecutionResult { code: 1 }
    }
}
