//! JSON-blob storage backend: one file holding the whole client
//! collection, loaded once at startup and written through on mutation.

pub mod client_repository;
pub mod connection;

pub use client_repository::JsonClientRepository;
pub use connection::JsonConnection;
