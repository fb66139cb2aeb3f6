use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::client::{CreateClientCommand, UpdateClientCommand};
use crate::domain::errors::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::models::client::Client;
use crate::storage::ClientStorage;

/// Service for managing client records in the salon tracker
#[derive(Clone)]
pub struct ClientService {
    repository: Arc<dyn ClientStorage>,
    ids: Arc<dyn IdGenerator>,
}

impl ClientService {
    /// Create a new ClientService
    pub fn new(repository: Arc<dyn ClientStorage>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Create a new client with an empty visit history
    pub async fn create_client(&self, command: CreateClientCommand) -> Result<Client> {
        info!("Creating client: name={}", command.name);

        self.validate_create_command(&command)?;
        let birthday = Self::parse_birthday(command.birthday.as_deref())?;

        let client = Client {
            id: self.ids.client_id(),
            name: command.name.trim().to_string(),
            email: command.email.trim().to_string(),
            phone: command.phone.trim().to_string(),
            birthday,
            visits: Vec::new(),
            created_at: Utc::now(),
        };

        self.repository.store_client(&client).await?;

        info!("Created client: {} with ID: {}", client.name, client.id);
        Ok(client)
    }

    /// Get a client by ID
    pub async fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        let client = self.repository.get_client(client_id).await?;

        if client.is_none() {
            warn!("Client not found: {}", client_id);
        }

        Ok(client)
    }

    /// List all clients in insertion order
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients = self.repository.list_clients().await?;

        info!("Found {} clients", clients.len());
        Ok(clients)
    }

    /// Merge the provided fields onto an existing client.
    /// Unknown ids are a silent no-op: returns Ok(None), logged.
    pub async fn update_client(
        &self,
        client_id: &str,
        command: UpdateClientCommand,
    ) -> Result<Option<Client>> {
        info!("Updating client: {}", client_id);

        let mut client = match self.repository.get_client(client_id).await? {
            Some(client) => client,
            None => {
                warn!("Update ignored, client not found: {}", client_id);
                return Ok(None);
            }
        };

        self.validate_update_command(&command)?;

        if let Some(name) = command.name {
            client.name = name.trim().to_string();
        }
        if let Some(email) = command.email {
            client.email = email.trim().to_string();
        }
        if let Some(phone) = command.phone {
            client.phone = phone.trim().to_string();
        }
        if let Some(birthday) = command.birthday {
            client.birthday = Self::parse_birthday(Some(&birthday))?;
        }

        self.repository.update_client(&client).await?;

        info!("Updated client: {} with ID: {}", client.name, client.id);
        Ok(Some(client))
    }

    /// Delete a client and all nested visits atomically.
    /// Unknown ids are a silent no-op: returns Ok(false), logged.
    pub async fn delete_client(&self, client_id: &str) -> Result<bool> {
        info!("Deleting client: {}", client_id);

        let deleted = self.repository.delete_client(client_id).await?;
        if !deleted {
            warn!("Delete ignored, client not found: {}", client_id);
        }

        Ok(deleted)
    }

    /// Clients whose birthday falls on the given calendar month and day,
    /// year-independent. Month is 1-based. Clients without a birthday
    /// never match.
    pub async fn get_clients_by_birthday(&self, month: u32, day: u32) -> Result<Vec<Client>> {
        let clients = self.repository.list_clients().await?;

        let matches: Vec<Client> = clients
            .into_iter()
            .filter(|client| {
                client
                    .birthday
                    .map(|b| b.month() == month && b.day() == day)
                    .unwrap_or(false)
            })
            .collect();

        info!(
            "Found {} clients with birthday on {:02}-{:02}",
            matches.len(),
            month,
            day
        );
        Ok(matches)
    }

    /// Validate create client command
    fn validate_create_command(&self, command: &CreateClientCommand) -> Result<()> {
        if command.name.trim().is_empty() {
            return Err(DomainError::Validation("Client name cannot be empty".to_string()).into());
        }
        if command.name.len() > 100 {
            return Err(DomainError::Validation(
                "Client name cannot exceed 100 characters".to_string(),
            )
            .into());
        }
        if command.email.trim().is_empty() {
            return Err(DomainError::Validation("Client email cannot be empty".to_string()).into());
        }
        if !command.email.contains('@') {
            return Err(DomainError::Validation(format!(
                "Invalid email address: {}",
                command.email
            ))
            .into());
        }
        if command.phone.trim().is_empty() {
            return Err(DomainError::Validation("Client phone cannot be empty".to_string()).into());
        }

        Ok(())
    }

    /// Validate update client command
    fn validate_update_command(&self, command: &UpdateClientCommand) -> Result<()> {
        if let Some(ref name) = command.name {
            if name.trim().is_empty() {
                return Err(
                    DomainError::Validation("Client name cannot be empty".to_string()).into(),
                );
            }
            if name.len() > 100 {
                return Err(DomainError::Validation(
                    "Client name cannot exceed 100 characters".to_string(),
                )
                .into());
            }
        }
        if let Some(ref email) = command.email {
            if !email.contains('@') {
                return Err(
                    DomainError::Validation(format!("Invalid email address: {}", email)).into(),
                );
            }
        }

        Ok(())
    }

    /// Parse an optional birthday string (YYYY-MM-DD). Empty clears it.
    fn parse_birthday(birthday: Option<&str>) -> Result<Option<NaiveDate>> {
        match birthday {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    DomainError::Validation(format!(
                        "Birthday must be in YYYY-MM-DD format, got: {}",
                        s
                    ))
                    .into()
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::UuidIdGenerator;
    use crate::storage::{JsonClientRepository, JsonConnection};
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn setup_test() -> (ClientService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repository = Arc::new(JsonClientRepository::new(connection));
        let service = ClientService::new(repository, Arc::new(UuidIdGenerator));
        (service, temp_dir)
    }

    fn create_command(name: &str) -> CreateClientCommand {
        CreateClientCommand {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "600123456".to_string(),
            birthday: None,
        }
    }

    #[tokio::test]
    async fn test_create_client() {
        let (service, _temp_dir) = setup_test();

        let client = service
            .create_client(CreateClientCommand {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                phone: "600".to_string(),
                birthday: Some("1990-05-14".to_string()),
            })
            .await
            .expect("Failed to create client");

        assert!(client.id.starts_with("client::"));
        assert_eq!(client.name, "Ana");
        assert_eq!(client.email, "a@x.com");
        assert_eq!(client.phone, "600");
        assert_eq!(client.birthday, NaiveDate::from_ymd_opt(1990, 5, 14));
        assert!(client.visits.is_empty());
    }

    #[tokio::test]
    async fn test_create_client_validation() {
        let (service, _temp_dir) = setup_test();

        // Empty name
        let mut command = create_command("Ana");
        command.name = "".to_string();
        assert!(service.create_client(command).await.is_err());

        // Email without @
        let mut command = create_command("Ana");
        command.email = "not-an-email".to_string();
        assert!(service.create_client(command).await.is_err());

        // Empty phone
        let mut command = create_command("Ana");
        command.phone = "  ".to_string();
        assert!(service.create_client(command).await.is_err());

        // Malformed birthday
        let mut command = create_command("Ana");
        command.birthday = Some("14/05/1990".to_string());
        assert!(service.create_client(command).await.is_err());
    }

    #[tokio::test]
    async fn test_created_ids_are_pairwise_distinct() {
        let (service, _temp_dir) = setup_test();

        let mut seen = HashSet::new();
        for i in 0..25 {
            let client = service
                .create_client(create_command(&format!("Client{}", i)))
                .await
                .unwrap();
            assert!(seen.insert(client.id), "duplicate client id generated");
        }
    }

    #[tokio::test]
    async fn test_get_nonexistent_client() {
        let (service, _temp_dir) = setup_test();

        let client = service.get_client("client::nonexistent").await.unwrap();
        assert!(client.is_none());
    }

    #[tokio::test]
    async fn test_update_client_merges_partial_fields() {
        let (service, _temp_dir) = setup_test();

        let created = service.create_client(create_command("Ana")).await.unwrap();

        let updated = service
            .update_client(
                &created.id,
                UpdateClientCommand {
                    phone: Some("699999999".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("Client should exist");

        // Only the provided field changed
        assert_eq!(updated.phone, "699999999");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_clears_birthday_with_empty_string() {
        let (service, _temp_dir) = setup_test();

        let mut command = create_command("Ana");
        command.birthday = Some("1990-05-14".to_string());
        let created = service.create_client(command).await.unwrap();
        assert!(created.birthday.is_some());

        let updated = service
            .update_client(
                &created.id,
                UpdateClientCommand {
                    birthday: Some("".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.birthday.is_none());
    }

    #[tokio::test]
    async fn test_update_nonexistent_client_is_noop() {
        let (service, _temp_dir) = setup_test();

        let result = service
            .update_client(
                "client::nonexistent",
                UpdateClientCommand {
                    name: Some("New Name".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_client_removes_record() {
        let (service, _temp_dir) = setup_test();

        let created = service.create_client(create_command("Ana")).await.unwrap();

        assert!(service.delete_client(&created.id).await.unwrap());
        assert!(service.get_client(&created.id).await.unwrap().is_none());

        // Second delete is a no-op
        assert!(!service.delete_client(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_clients_by_birthday() {
        let (service, _temp_dir) = setup_test();

        let mut command = create_command("May");
        command.birthday = Some("1990-05-14".to_string());
        service.create_client(command).await.unwrap();

        let mut command = create_command("AlsoMay");
        command.birthday = Some("1985-05-14".to_string());
        service.create_client(command).await.unwrap();

        let mut command = create_command("June");
        command.birthday = Some("1990-06-14".to_string());
        service.create_client(command).await.unwrap();

        // No birthday at all
        service.create_client(create_command("NoBirthday")).await.unwrap();

        let matches = service.get_clients_by_birthday(5, 14).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|c| c.name.contains("May")));

        let none = service.get_clients_by_birthday(12, 25).await.unwrap();
        assert!(none.is_empty());
    }
}
