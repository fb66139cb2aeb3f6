//! # REST API for Client Management
//!
//! Endpoints for creating, retrieving, updating, and deleting clients,
//! plus the birthday lookup used for greetings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::commands::client::{CreateClientCommand, UpdateClientCommand};
use crate::domain::errors::DomainError;
use crate::io::rest::mappers::client_mapper::ClientMapper;
use crate::AppState;
use shared::{CreateClientRequest, UpdateClientRequest};

/// Create a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> impl IntoResponse {
    info!("POST /api/clients - request: {:?}", request);

    let command = CreateClientCommand {
        name: request.name,
        email: request.email,
        phone: request.phone,
        birthday: request.birthday,
    };

    match state.client_service.create_client(command).await {
        Ok(client) => {
            let response = ClientMapper::to_client_response_dto(client, "Client created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create client: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get a client by ID
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/clients/{}", client_id);

    match state.client_service.get_client(&client_id).await {
        Ok(Some(client)) => (StatusCode::OK, Json(ClientMapper::to_dto(client))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Client not found").into_response(),
        Err(e) => {
            error!("Failed to get client: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving client").into_response()
        }
    }
}

/// List all clients
pub async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/clients");

    match state.client_service.list_clients().await {
        Ok(clients) => {
            (StatusCode::OK, Json(ClientMapper::to_client_list_dto(clients))).into_response()
        }
        Err(e) => {
            error!("Failed to list clients: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing clients").into_response()
        }
    }
}

/// Update a client. Unknown ids yield 404 without mutating anything.
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> impl IntoResponse {
    info!("PUT /api/clients/{} - request: {:?}", client_id, request);

    let command = UpdateClientCommand {
        name: request.name,
        email: request.email,
        phone: request.phone,
        birthday: request.birthday,
    };

    match state.client_service.update_client(&client_id, command).await {
        Ok(Some(client)) => {
            let response = ClientMapper::to_client_response_dto(client, "Client updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Client not found").into_response(),
        Err(e) => {
            error!("Failed to update client: {}", e);
            let status = match e.downcast_ref::<DomainError>() {
                Some(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete a client and all nested visits
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/clients/{}", client_id);

    match state.client_service.delete_client(&client_id).await {
        Ok(true) => (StatusCode::NO_CONTENT, "").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Client not found").into_response(),
        Err(e) => {
            error!("Failed to delete client: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Query parameters for the birthday lookup (1-based month)
#[derive(Debug, Deserialize)]
pub struct BirthdayParams {
    pub month: u32,
    pub day: u32,
}

/// List clients whose birthday falls on the given month/day
pub async fn get_clients_by_birthday(
    State(state): State<AppState>,
    Query(params): Query<BirthdayParams>,
) -> impl IntoResponse {
    info!(
        "GET /api/clients/birthdays?month={}&day={}",
        params.month, params.day
    );

    match state
        .client_service
        .get_clients_by_birthday(params.month, params.day)
        .await
    {
        Ok(clients) => {
            (StatusCode::OK, Json(ClientMapper::to_client_list_dto(clients))).into_response()
        }
        Err(e) => {
            error!("Failed to look up birthdays: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing birthdays").into_response()
        }
    }
}
