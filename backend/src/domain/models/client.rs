//! backend/src/domain/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a salon client.
/// Owns its visit history; a visit never exists outside its client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<NaiveDate>,
    /// Insertion order; history reads sort a copy, never this list
    pub visits: Vec<Visit>,
    pub created_at: DateTime<Utc>,
}

/// Domain model representing one appointment/service instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub date: DateTime<Utc>,
    pub service: String,
    pub price: f64,
    pub notes: Option<String>,
}
