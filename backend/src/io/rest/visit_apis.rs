//! # REST API for Visit Recording
//!
//! Endpoints for attaching visits to a client and reading the
//! date-ordered visit history.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::commands::visit::AddVisitCommand;
use crate::domain::errors::DomainError;
use crate::io::rest::mappers::client_mapper::ClientMapper;
use crate::AppState;
use shared::AddVisitRequest;

/// Record a visit for a client. Unknown client ids yield 404.
pub async fn add_visit(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<AddVisitRequest>,
) -> impl IntoResponse {
    info!("POST /api/clients/{}/visits - request: {:?}", client_id, request);

    let command = AddVisitCommand {
        client_id,
        date: request.date,
        service: request.service,
        price: request.price,
        notes: request.notes,
    };

    match state.visit_service.add_visit(command).await {
        Ok(visit) => {
            let response = ClientMapper::to_visit_response_dto(visit, "Visit recorded successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to add visit: {}", e);
            let status = match e.downcast_ref::<DomainError>() {
                Some(DomainError::ClientNotFound(_)) => StatusCode::NOT_FOUND,
                Some(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
                None => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a client's visit history, most recent first.
/// An unknown client id yields an empty history.
pub async fn get_visit_history(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/clients/{}/visits", client_id);

    match state.visit_service.get_visit_history(&client_id).await {
        Ok(visits) => {
            (StatusCode::OK, Json(ClientMapper::to_visit_history_dto(visits))).into_response()
        }
        Err(e) => {
            error!("Failed to get visit history: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving visit history").into_response()
        }
    }
}
