use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::visit::AddVisitCommand;
use crate::domain::errors::DomainError;
use crate::domain::ids::IdGenerator;
use crate::domain::models::client::Visit;
use crate::storage::ClientStorage;

/// Service for recording visits and reading visit history
#[derive(Clone)]
pub struct VisitService {
    repository: Arc<dyn ClientStorage>,
    ids: Arc<dyn IdGenerator>,
}

impl VisitService {
    /// Create a new VisitService
    pub fn new(repository: Arc<dyn ClientStorage>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Record a visit against an existing client.
    ///
    /// Fails with `DomainError::ClientNotFound` when the client id is
    /// unknown. The reference behavior sometimes silently dropped such
    /// visits; this contract surfaces the mistake instead.
    pub async fn add_visit(&self, command: AddVisitCommand) -> Result<Visit> {
        info!(
            "Adding visit for client {}: service={}",
            command.client_id, command.service
        );

        let mut client = self
            .repository
            .get_client(&command.client_id)
            .await?
            .ok_or_else(|| DomainError::ClientNotFound(command.client_id.clone()))?;

        self.validate_add_command(&command)?;
        let date = Self::parse_visit_date(&command.date)?;

        let visit = Visit {
            id: self.ids.visit_id(),
            date,
            service: command.service.trim().to_string(),
            price: command.price,
            notes: command.notes.filter(|n| !n.trim().is_empty()),
        };

        // Stored order stays insertion order; sorting happens at read time
        client.visits.push(visit.clone());
        self.repository.update_client(&client).await?;

        info!("Recorded visit {} for client {}", visit.id, client.id);
        Ok(visit)
    }

    /// A client's visits as a fresh list sorted by date descending.
    /// Returns an empty list when the client is absent.
    pub async fn get_visit_history(&self, client_id: &str) -> Result<Vec<Visit>> {
        let client = match self.repository.get_client(client_id).await? {
            Some(client) => client,
            None => {
                warn!("Visit history requested for unknown client: {}", client_id);
                return Ok(Vec::new());
            }
        };

        let mut visits = client.visits;
        visits.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(visits)
    }

    /// Validate add visit command
    fn validate_add_command(&self, command: &AddVisitCommand) -> Result<()> {
        if command.service.trim().is_empty() {
            return Err(DomainError::Validation("Visit service cannot be empty".to_string()).into());
        }
        if command.price < 0.0 {
            return Err(DomainError::Validation(format!(
                "Visit price cannot be negative: {}",
                command.price
            ))
            .into());
        }

        Ok(())
    }

    /// Parse a visit date. Accepts RFC 3339 or the datetime-local forms
    /// the booking UI submits (YYYY-MM-DDTHH:MM[:SS], treated as UTC).
    fn parse_visit_date(date: &str) -> Result<DateTime<Utc>> {
        let date = date.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
            return Ok(parsed.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(date, format) {
                return Ok(parsed.and_utc());
            }
        }

        Err(DomainError::Validation(format!("Invalid visit date: {}", date)).into())
    }
}
