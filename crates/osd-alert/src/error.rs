//! Error types for the alerting subsystem.

use osd_api::ResourceType;
use thiserror::Error;

/// Result type alias for alerting operations.
pub type AlertResult<T> = Result<T, AlertError>;

/// Error variants for alerting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// The backing store is unavailable or rejected the request.
    #[error("Alert store error: {0}")]
    Store(String),

    /// No alert with this id exists for the resource type.
    #[error("Alert not found: {alert_id} ({resource})")]
    NotFound {
        /// Resource type the caller named.
        resource: ResourceType,
        /// Alert id the caller named.
        alert_id: i64,
    },

    /// The process-wide facade was used before it was installed.
    #[error("Alert facade not initialized")]
    NotInitialized,

    /// The process-wide facade was installed twice.
    #[error("Alert facade already initialized")]
    AlreadyInitialized,

    /// Invalid facade configuration.
    #[error("Config error: {0}")]
    Config(String),
}
