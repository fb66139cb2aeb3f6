use anyhow::Result;
use shared::Client as SharedClient;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

/// File name of the persisted client blob inside the data directory
pub const CLIENTS_FILE: &str = "clients.json";

/// JsonConnection manages the data directory and the in-memory client
/// collection backed by a single JSON blob.
///
/// The blob is loaded once at construction; every mutation writes the
/// whole collection back through to disk. An absent or unreadable blob
/// yields an empty collection (logged, never fatal).
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
    clients: Arc<Mutex<Vec<SharedClient>>>,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        let clients = Self::load_clients(&base_path.join(CLIENTS_FILE));

        Ok(Self {
            base_directory: base_path,
            clients: Arc::new(Mutex::new(clients)),
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (~/Documents/Salon Tracker)
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Salon Tracker");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Load the persisted blob. Absent or corrupt blobs reset to empty.
    fn load_clients(path: &Path) -> Vec<SharedClient> {
        if !path.exists() {
            debug!("No client store at {}, starting empty", path.display());
            return Vec::new();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Vec<SharedClient>>(&contents) {
                Ok(clients) => {
                    info!("Loaded {} clients from {}", clients.len(), path.display());
                    clients
                }
                Err(e) => {
                    error!(
                        "Failed to parse client store {}: {}. Starting with an empty collection.",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                error!(
                    "Failed to read client store {}: {}. Starting with an empty collection.",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Get the path of the persisted blob
    pub fn clients_file_path(&self) -> PathBuf {
        self.base_directory.join(CLIENTS_FILE)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Snapshot of the current client collection
    pub fn read_clients(&self) -> Vec<SharedClient> {
        self.clients.lock().unwrap().clone()
    }

    /// Apply a mutation to the collection and write it through to disk
    pub fn mutate_clients<R>(&self, mutate: impl FnOnce(&mut Vec<SharedClient>) -> R) -> Result<R> {
        let mut clients = self.clients.lock().unwrap();
        let result = mutate(&mut clients);
        self.save(&clients)?;
        Ok(result)
    }

    /// Serialize the whole collection. Atomic write using temp file.
    fn save(&self, clients: &[SharedClient]) -> Result<()> {
        let path = self.clients_file_path();
        let json = serde_json::to_string_pretty(clients)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_client(id: &str) -> SharedClient {
        SharedClient {
            id: id.to_string(),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            phone: "600".to_string(),
            birthday: Some("1990-05-14".to_string()),
            visits: vec![shared::Visit {
                id: format!("{id}-visit"),
                date: "2024-01-01T10:00:00+00:00".to_string(),
                service: "manicure".to_string(),
                price: 25.0,
                notes: None,
            }],
            created_at: "2024-01-01T09:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_missing_blob_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        assert!(connection.read_clients().is_empty());
    }

    #[test]
    fn test_corrupt_blob_resets_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CLIENTS_FILE), "{not json!").unwrap();

        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        assert!(connection.read_clients().is_empty());
    }

    #[test]
    fn test_mutations_write_through_and_reload() {
        let temp_dir = TempDir::new().unwrap();

        {
            let connection = JsonConnection::new(temp_dir.path()).unwrap();
            connection
                .mutate_clients(|clients| {
                    clients.push(sample_client("client::1"));
                    clients.push(sample_client("client::2"));
                })
                .unwrap();
        }

        // A fresh connection reproduces an equal collection
        let reloaded = JsonConnection::new(temp_dir.path()).unwrap();
        let clients = reloaded.read_clients();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0], sample_client("client::1"));
        assert_eq!(clients[1], sample_client("client::2"));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        connection
            .mutate_clients(|clients| clients.push(sample_client("client::1")))
            .unwrap();

        assert!(connection.clients_file_path().exists());
        assert!(!connection.clients_file_path().with_extension("tmp").exists());
    }
}
