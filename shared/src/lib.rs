use serde::{Deserialize, Serialize};

/// Client ID in format: "client::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    /// Visit history in insertion order (sorted only at read time)
    pub visits: Vec<Visit>,
    pub created_at: String, // RFC 3339 timestamp
}

/// Visit ID in format: "visit::<uuid>", unique within its client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub date: String, // RFC 3339 timestamp
    /// Service performed (e.g. "manicure", "pedicure")
    pub service: String,
    /// Price charged for the visit (non-negative)
    pub price: f64,
    pub notes: Option<String>,
}

/// Request for creating a new client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
}

/// Request for updating an existing client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// New birthday; an empty string clears the stored birthday
    pub birthday: Option<String>,
}

/// Response after creating or updating a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientResponse {
    pub client: Client,
    pub success_message: String,
}

/// Response containing a list of clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientListResponse {
    pub clients: Vec<Client>,
}

/// Request for recording a visit against an existing client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddVisitRequest {
    /// Timestamp of the appointment (RFC 3339, or YYYY-MM-DDTHH:MM)
    pub date: String,
    pub service: String,
    pub price: f64,
    pub notes: Option<String>,
}

/// Response after recording a visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitResponse {
    pub visit: Visit,
    pub success_message: String,
}

/// Visit history ordered by date descending (most recent first)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitHistoryResponse {
    pub visits: Vec<Visit>,
}

/// Number of visits recorded for a single service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCount {
    pub service: String,
    pub count: u32,
}

/// Aggregate statistics over all clients and visits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatisticsResponse {
    pub total_clients: usize,
    pub total_visits: usize,
    /// Rounded to 2 decimal places; 0 when there are no clients
    pub average_visits_per_client: f64,
    /// Top 5 services by visit count, descending
    pub popular_services: Vec<ServiceCount>,
}

/// Request for admin panel authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from admin panel authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
}
