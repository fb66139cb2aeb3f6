//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the salon client tracker. This layer
//! handles request/response serialization, translation from domain errors
//! to HTTP status codes, and request logging. Business logic stays in the
//! domain layer.

pub mod admin_apis;
pub mod client_apis;
pub mod mappers;
pub mod statistics_apis;
pub mod visit_apis;
