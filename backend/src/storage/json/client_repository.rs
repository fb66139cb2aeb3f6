use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::connection::JsonConnection;
use crate::domain::models::client::Client as DomainClient;
use crate::io::rest::mappers::client_mapper::ClientMapper;
use crate::storage::traits::ClientStorage;

/// JSON-blob-backed client repository
#[derive(Clone)]
pub struct JsonClientRepository {
    connection: JsonConnection,
}

impl JsonClientRepository {
    /// Create a new JSON client repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ClientStorage for JsonClientRepository {
    /// Store a new client
    async fn store_client(&self, client: &DomainClient) -> Result<()> {
        let dto = ClientMapper::to_dto(client.clone());
        self.connection.mutate_clients(|clients| clients.push(dto))?;

        info!("Stored client {}", client.id);
        Ok(())
    }

    /// Retrieve a specific client by ID
    async fn get_client(&self, client_id: &str) -> Result<Option<DomainClient>> {
        self.connection
            .read_clients()
            .into_iter()
            .find(|c| c.id == client_id)
            .map(ClientMapper::to_domain)
            .transpose()
            .context("Failed to map stored client to domain model")
    }

    /// List all clients in insertion order
    async fn list_clients(&self) -> Result<Vec<DomainClient>> {
        let clients = self
            .connection
            .read_clients()
            .into_iter()
            .map(ClientMapper::to_domain)
            .collect::<Result<Vec<_>>>()
            .context("Failed to map stored clients to domain models")?;

        debug!("Listed {} clients", clients.len());
        Ok(clients)
    }

    /// Replace an existing client record (visits included)
    async fn update_client(&self, client: &DomainClient) -> Result<bool> {
        let dto = ClientMapper::to_dto(client.clone());
        let updated = self.connection.mutate_clients(|clients| {
            match clients.iter_mut().find(|c| c.id == dto.id) {
                Some(slot) => {
                    *slot = dto;
                    true
                }
                None => false,
            }
        })?;

        if updated {
            info!("Updated client {}", client.id);
        }
        Ok(updated)
    }

    /// Delete a client and all nested visits
    async fn delete_client(&self, client_id: &str) -> Result<bool> {
        let deleted = self.connection.mutate_clients(|clients| {
            let before = clients.len();
            clients.retain(|c| c.id != client_id);
            clients.len() != before
        })?;

        if deleted {
            info!("Deleted client {}", client_id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonClientRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = JsonClientRepository::new(connection);
        (repo, temp_dir)
    }

    fn sample_client(id: &str) -> DomainClient {
        DomainClient {
            id: id.to_string(),
            name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            phone: "600123456".to_string(),
            birthday: chrono::NaiveDate::from_ymd_opt(1990, 5, 14),
            visits: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_store_and_get_client() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1"))
            .await
            .expect("Failed to store client");

        let retrieved = repo.get_client("client::1").await.unwrap();
        assert_eq!(retrieved, Some(sample_client("client::1")));

        let missing = repo.get_client("client::nonexistent").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::b")).await.unwrap();
        repo.store_client(&sample_client("client::a")).await.unwrap();

        let clients = repo.list_clients().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].id, "client::b");
        assert_eq!(clients[1].id, "client::a");
    }

    #[tokio::test]
    async fn test_update_client() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1")).await.unwrap();

        let mut updated = sample_client("client::1");
        updated.name = "Ana Maria Torres".to_string();
        assert!(repo.update_client(&updated).await.unwrap());

        let retrieved = repo.get_client("client::1").await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Ana Maria Torres");

        // Unknown id is a no-op
        assert!(!repo.update_client(&sample_client("client::2")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_client() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("client::1")).await.unwrap();
        assert!(repo.delete_client("client::1").await.unwrap());
        assert!(repo.get_client("client::1").await.unwrap().is_none());

        // Deleting again is a no-op
        assert!(!repo.delete_client("client::1").await.unwrap());
    }

    #[tokio::test]
    async fn test_clients_survive_repository_restart() {
        let temp_dir = TempDir::new().unwrap();

        {
            let connection = JsonConnection::new(temp_dir.path()).unwrap();
            let repo = JsonClientRepository::new(connection);
            let mut client = sample_client("client::1");
            client.visits.push(crate::domain::models::client::Visit {
                id: "visit::1".to_string(),
                date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                service: "manicure".to_string(),
                price: 25.0,
                notes: Some("gel".to_string()),
            });
            repo.store_client(&client).await.unwrap();
        }

        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = JsonClientRepository::new(connection);
        let clients = repo.list_clients().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].visits.len(), 1);
        assert_eq!(clients[0].visits[0].service, "manicure");
        assert_eq!(clients[0].visits[0].price, 25.0);
    }
}
