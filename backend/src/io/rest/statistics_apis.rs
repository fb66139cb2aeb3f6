//! # REST API for Statistics
//!
//! Aggregate counters shown on the admin panel dashboard.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::AppState;
use shared::{ServiceCount, StatisticsResponse};

/// Get aggregate statistics over all clients and visits
pub async fn get_statistics(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/statistics");

    match state.statistics_service.get_statistics().await {
        Ok(stats) => {
            let response = StatisticsResponse {
                total_clients: stats.total_clients,
                total_visits: stats.total_visits,
                average_visits_per_client: stats.average_visits_per_client,
                popular_services: stats
                    .popular_services
                    .into_iter()
                    .map(|t| ServiceCount {
                        service: t.service,
                        count: t.count,
                    })
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute statistics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing statistics").into_response()
        }
    }
}
