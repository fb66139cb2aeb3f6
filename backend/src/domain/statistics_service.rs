use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::storage::ClientStorage;

/// Aggregate statistics derived from the client collection
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_clients: usize,
    pub total_visits: usize,
    /// Rounded to 2 decimal places; 0 when there are no clients
    pub average_visits_per_client: f64,
    /// Top 5 services by visit count descending, ties in
    /// first-encountered order
    pub popular_services: Vec<ServiceTally>,
}

/// Number of visits recorded for a single service
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTally {
    pub service: String,
    pub count: u32,
}

/// Service deriving statistics over clients and visits
#[derive(Clone)]
pub struct StatisticsService {
    repository: Arc<dyn ClientStorage>,
}

impl StatisticsService {
    /// Create a new StatisticsService
    pub fn new(repository: Arc<dyn ClientStorage>) -> Self {
        Self { repository }
    }

    /// Compute aggregate statistics over the whole collection
    pub async fn get_statistics(&self) -> Result<Statistics> {
        let clients = self.repository.list_clients().await?;

        let total_clients = clients.len();
        let total_visits: usize = clients.iter().map(|c| c.visits.len()).sum();

        let average_visits_per_client = if total_clients == 0 {
            0.0
        } else {
            Self::round2(total_visits as f64 / total_clients as f64)
        };

        // Tally in encounter order so ties keep first-encountered rank
        let mut tallies: Vec<ServiceTally> = Vec::new();
        for client in &clients {
            for visit in &client.visits {
                match tallies.iter_mut().find(|t| t.service == visit.service) {
                    Some(tally) => tally.count += 1,
                    None => tallies.push(ServiceTally {
                        service: visit.service.clone(),
                        count: 1,
                    }),
                }
            }
        }
        tallies.sort_by(|a, b| b.count.cmp(&a.count));
        tallies.truncate(5);

        info!(
            "Statistics: {} clients, {} visits, {} services tracked",
            total_clients,
            total_visits,
            tallies.len()
        );

        Ok(Statistics {
            total_clients,
            total_visits,
            average_visits_per_client,
            popular_services: tallies,
        })
    }

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
