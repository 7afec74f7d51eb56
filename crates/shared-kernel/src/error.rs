// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FiltrationError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FiltrationError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, FiltrationError>;

impl FiltrationError {
    /// Innermost error once every `Context` layer has been peeled off.
    pub fn root(&self) -> &FiltrationError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_logic(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::Logic { .. }))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InvalidArgument { .. }))
    }

    pub fn is_invalid_handler(&self) -> bool {
        matches!(self.root(), Self::Application(ApplicationError::InvalidHandler { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// A setter received a value outside its declared domain.
    #[error("Invalid argument for \"{option}\": {reason}")]
    InvalidArgument { option: String, reason: String },

    /// Bounds could not be resolved from the configured defaults.
    #[error("Logic error: {reason}")]
    Logic { reason: String },
}

impl DomainError {
    pub fn invalid_argument(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            option: option.into(),
            reason: reason.into(),
        }
    }

    pub fn logic(reason: impl Into<String>) -> Self {
        Self::Logic { reason: reason.into() }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Handler \"{handler}\" is not an instance of {expected}")]
    InvalidHandler { handler: String, expected: String },

    #[error("Failed to apply filter \"{field}\": {reason}")]
    FilterApplyFailed {
        field: String,
        reason: String,
        #[source]
        source: Option<Box<FiltrationError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported definition format '{extension}' for '{path}'")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Search client rejected {operation}: {details}")]
    ClientError { operation: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FiltrationError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for FiltrationError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FiltrationError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FiltrationError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FiltrationError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
