//! Shared primitives for all Keyscope crates.

#![forbid(unsafe_code)]

/// Opaque integer identifiers assigned by the external administrative system.
pub mod ids;

use thiserror::Error;

pub use ids::{CompanyId, MembershipId};

/// Result type used across Keyscope crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// A missing grant is never an error; it is folded into a denial. The
/// variants here cover the failures a caller must handle differently from a
/// denial.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Credential holds active memberships in more than one company and the
    /// caller did not name a target company.
    #[error("ambiguous scope: {0}")]
    AmbiguousScope(String),

    /// Storage or connectivity failure while reading the relation graph,
    /// carrying the underlying cause.
    #[error("relation store failure: {0}")]
    RelationStore(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
