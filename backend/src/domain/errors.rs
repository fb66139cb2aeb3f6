//! Domain error taxonomy.
//!
//! Services return `anyhow::Result`; these variants let the REST layer
//! map failures to proper status codes by downcast instead of matching
//! on message strings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// An operation referenced a client id that does not exist
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Caller-supplied fields failed validation
    #[error("{0}")]
    Validation(String),
}
