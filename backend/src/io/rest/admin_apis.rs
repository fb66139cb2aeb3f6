//! # REST API for Admin Authentication
//!
//! The admin panel gate: validates an email/password pair before the
//! panel unlocks its client-management views.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::commands::admin::ValidateLoginCommand;
use crate::AppState;
use shared::{AdminLoginRequest, AdminLoginResponse};

/// Validate admin credentials
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/admin/login");

    let command = ValidateLoginCommand {
        email: request.email,
        password: request.password,
    };

    match state.admin_service.validate_login(command) {
        Ok(result) => {
            let status = if result.success {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            };
            let response = AdminLoginResponse {
                success: result.success,
                message: result.message,
            };
            (status, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to validate admin login: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error validating login").into_response()
        }
    }
}
