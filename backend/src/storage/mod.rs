//! # Storage Module
//!
//! Data persistence for the salon tracker. The domain layer talks to the
//! `ClientStorage` trait; the JSON backend is the only implementation in
//! this design (a single blob mirroring the reference deployment).

pub mod json;
pub mod traits;

pub use json::{JsonClientRepository, JsonConnection};
pub use traits::ClientStorage;
