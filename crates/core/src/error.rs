//! Domain-level error taxonomy.
//!
//! Every failure a handler can surface maps onto one of these variants; the
//! API crate translates them into HTTP status codes and JSON bodies.

/// Domain error shared by all CaseBridge crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: crate::types::DbId,
    },

    /// Malformed or missing input (bad fields, invalid enum value, etc.).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or state conflict (duplicate bar number, repeat verify).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (wrong role or not the owner).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A failure from an external collaborator (payment gateway, assistant).
    /// Surfaced verbatim to the caller; nothing is retried internally.
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience result alias for domain operations.
pub type CoreResult<T> = Result<T, CoreError>;
