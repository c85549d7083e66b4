//! Error types for the OSD domain model.

use thiserror::Error;

/// Result type alias for domain model operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error variants for domain model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A simple enum name did not resolve to any declared value.
    #[error("no openstorage.{type_name} for {input}")]
    NotFound {
        /// Upper-cased type prefix of the enum being parsed.
        type_name: String,
        /// The string the caller passed in, unmodified.
        input: String,
    },

    /// A class-of-service name did not resolve.
    #[error("Invalid cos value: {input}")]
    InvalidCos {
        /// The string the caller passed in, unmodified.
        input: String,
    },

    /// A raw integer is not a declared value of the enum.
    #[error("unknown {type_name} value {value}")]
    UnknownValue {
        /// Upper-cased type prefix of the enum.
        type_name: String,
        /// The raw integer value.
        value: i32,
    },
}
