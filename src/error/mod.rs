//! Error types for utilkit.
//!
//! Collection operations and decorators never wrap errors raised by the
//! caller's own iteratees; those come back unchanged through the `try_*`
//! variants. `KernelError` only covers failures of the kit itself: unknown
//! method names, missing async runtime, and configuration problems.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for utilkit
#[derive(Error, Debug)]
pub enum KernelError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] No method named '{name}' is registered")]
    UnknownMethod { code: u16, name: String },

    #[error("[E{code:04}] Scheduling failed: {message}")]
    Schedule {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl KernelError {
    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an unknown-method error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod {
            code: ErrorCode::INVOKE_UNKNOWN_METHOD,
            name: name.into(),
        }
    }

    /// Create a scheduling error with specific code
    pub fn schedule_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Schedule {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. } | Self::Schedule { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::UnknownMethod { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. } | Self::Schedule { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
            Self::UnknownMethod { .. } => {}
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::UnknownMethod { code, .. }
            | Self::Schedule { code, .. } => *code,
        }
    }

    /// Registry description of this error's code
    pub fn description(&self) -> &'static str {
        describe_error_code(self.code())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("{}: {}", self.description(), message),
            },
            Self::UnknownMethod { name, .. } => {
                format!("Cannot invoke '{}': method is not registered", name)
            }
            Self::Schedule { message, .. } => {
                format!("{}: {}", self.description(), message)
            }
        }
    }
}

/// Result type alias for utilkit operations.
pub type Result<T> = std::result::Result<T, KernelError>;
