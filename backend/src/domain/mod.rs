//! # Domain Module
//!
//! Contains all business logic for the salon client tracker.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how clients and visits are modeled and managed. It operates
//! independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **client_service**: Client CRUD operations and birthday lookups
//! - **visit_service**: Visit recording and date-ordered history reads
//! - **statistics_service**: Aggregate counting over clients and visits
//! - **admin_service**: Admin panel login gate with attempt tracking
//! - **ids**: Injectable unique-id generation
//!
//! ## Business Rules
//!
//! - A client owns its visits; deleting the client removes them all
//! - Visit storage order is insertion order; history reads sort a copy
//! - A visit recorded against an unknown client id fails loudly
//! - Unknown ids on update/delete are silent no-ops

pub mod admin_service;
pub mod client_service;
pub mod commands;
pub mod errors;
pub mod ids;
pub mod models;
pub mod statistics_service;
pub mod visit_service;

pub use admin_service::*;
pub use client_service::*;
pub use errors::*;
pub use ids::*;
pub use statistics_service::*;
pub use visit_service::*;
