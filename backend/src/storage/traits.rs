//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use crate::domain::models::client::Client;
use anyhow::Result;
use async_trait::async_trait;

/// Trait defining the interface for client storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// (a JSON blob, a database, etc.) without modification. Visits live
/// nested inside their client, so client-level operations cover them.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Store a new client
    async fn store_client(&self, client: &Client) -> Result<()>;

    /// Retrieve a specific client by ID
    async fn get_client(&self, client_id: &str) -> Result<Option<Client>>;

    /// List all clients in insertion order
    async fn list_clients(&self) -> Result<Vec<Client>>;

    /// Replace an existing client record (visits included)
    /// Returns false when no client with that ID exists
    async fn update_client(&self, client: &Client) -> Result<bool>;

    /// Delete a client and all nested visits
    /// Returns false when no client with that ID exists
    async fn delete_client(&self, client_id: &str) -> Result<bool>;
}
