//! Error types for dispatch and configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The argument's runtime type is outside what the operation accepts.
    InvalidArgument,
    /// A safe cast asked for a type the container does not hold.
    BadCast,
}

/// Errors produced while dispatching over a container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("bad cast: expected {expected}, found {actual}")]
    BadCast {
        expected: &'static str,
        actual: &'static str,
    },
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::UnsupportedType { .. } => ErrorKind::InvalidArgument,
            DispatchError::BadCast { .. } => ErrorKind::BadCast,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Errors produced while loading a [`DispatchConfig`](crate::DispatchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_is_invalid_argument() {
        let err = DispatchError::UnsupportedType { type_name: "f64" };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "unsupported type: f64");
    }

    #[test]
    fn bad_cast_is_distinct_kind() {
        let err = DispatchError::BadCast {
            expected: "alloc::string::String",
            actual: "i32",
        };
        assert_eq!(err.kind(), ErrorKind::BadCast);
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("found i32"));
    }

    #[test]
    fn invalid_value_display() {
        let err = ConfigError::invalid_value("labels.int", "must not be empty");
        let display = err.to_string();
        assert!(display.contains("labels.int"));
        assert!(display.contains("must not be empty"));
    }
}
