use std::io;

use thiserror::Error;

/// Application-wide error type for the veritensor action.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Missing required input 'path': the scan target must not be empty")]
    MissingPath,

    #[error("Scanner '{0}' not found; is it installed and on PATH?")]
    ToolNotFound(String),

    #[error("Scanner '{0}' is not executable")]
    ToolNotExecutable(String),

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }

    /// Classify a spawn failure for `program`.
    pub fn launch(program: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => AppError::ToolNotFound(program.to_string()),
            io::ErrorKind::PermissionDenied => AppError::ToolNotExecutable(program.to_string()),
            _ => AppError::Launch { program: program.to_string(), source },
        }
    }

    /// Process exit status for an error raised before or while launching the
    /// scanner. Codes 126 and 127 follow the shell convention for a command
    /// that cannot run or cannot be found.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingPath | AppError::Config(_) | AppError::ConfigParse(_) => 2,
            AppError::ToolNotFound(_) => 127,
            AppError::ToolNotExecutable(_) => 126,
            AppError::Launch { .. } | AppError::Io(_) => 1,
        }
    }
}
