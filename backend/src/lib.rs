//! # Salon Tracker Backend
//!
//! Backend for the nail-care studio client tracker. The crate is split
//! into three layers:
//!
//! - `domain` — business logic: client records, visit recording,
//!   statistics, and the admin login gate
//! - `storage` — persistence of the client collection as a single JSON
//!   blob on disk
//! - `io` — REST endpoints that expose the domain services over HTTP
//!
//! [`initialize_backend`] wires the layers together and [`create_router`]
//! produces the axum router served by the binary.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod domain;
pub mod io;
pub mod storage;

use domain::{AdminService, ClientService, StatisticsService, UuidIdGenerator, VisitService};
use io::rest::{admin_apis, client_apis, statistics_apis, visit_apis};
use storage::{JsonClientRepository, JsonConnection};

/// Application state shared across REST handlers
#[derive(Clone)]
pub struct AppState {
    pub client_service: ClientService,
    pub visit_service: VisitService,
    pub statistics_service: StatisticsService,
    pub admin_service: AdminService,
}

/// Initialize the backend with the default data directory
/// (`~/Documents/Salon Tracker`).
pub async fn initialize_backend() -> anyhow::Result<AppState> {
    let connection = JsonConnection::new_default()?;
    initialize_with_connection(connection).await
}

/// Initialize the backend against a specific data directory.
/// Used by tests to run against a temporary location.
pub async fn initialize_backend_in(base_directory: &std::path::Path) -> anyhow::Result<AppState> {
    let connection = JsonConnection::new(base_directory)?;
    initialize_with_connection(connection).await
}

async fn initialize_with_connection(connection: JsonConnection) -> anyhow::Result<AppState> {
    info!("Initializing backend with data at {:?}", connection.clients_file_path());

    let repository = Arc::new(JsonClientRepository::new(connection));
    let ids = Arc::new(UuidIdGenerator);

    let client_service = ClientService::new(repository.clone(), ids.clone());
    let visit_service = VisitService::new(repository.clone(), ids);
    let statistics_service = StatisticsService::new(repository);
    let admin_service = AdminService::new();

    Ok(AppState {
        client_service,
        visit_service,
        statistics_service,
        admin_service,
    })
}

/// Build the application router with all REST routes and CORS configured
pub fn create_router(state: AppState) -> Router {
    // CORS setup to allow the frontend dev server to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/clients",
            post(client_apis::create_client).get(client_apis::list_clients),
        )
        .route("/clients/birthdays", get(client_apis::get_clients_by_birthday))
        .route(
            "/clients/:id",
            get(client_apis::get_client)
                .put(client_apis::update_client)
                .delete(client_apis::delete_client),
        )
        .route(
            "/clients/:id/visits",
            post(visit_apis::add_visit).get(visit_apis::get_visit_history),
        )
        .route("/statistics", get(statistics_apis::get_statistics))
        .route("/admin/login", post(admin_apis::admin_login));

    Router::new().nest("/api", api_routes).layer(cors).with_state(state)
}
