// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod client {
    /// Input for creating a new client.
    #[derive(Debug, Clone)]
    pub struct CreateClientCommand {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub birthday: Option<String>,
    }

    /// Input for a partial-field update of an existing client.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateClientCommand {
        pub name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub birthday: Option<String>,
    }
}

pub mod visit {
    /// Input for recording a visit against an existing client.
    #[derive(Debug, Clone)]
    pub struct AddVisitCommand {
        pub client_id: String,
        pub date: String,
        pub service: String,
        pub price: f64,
        pub notes: Option<String>,
    }
}

pub mod admin {
    /// Input for validating an admin login attempt.
    #[derive(Debug, Clone)]
    pub struct ValidateLoginCommand {
        pub email: String,
        pub password: String,
    }

    /// Result of validating an admin login attempt.
    #[derive(Debug, Clone)]
    pub struct ValidateLoginResult {
        pub success: bool,
        pub message: String,
    }
}
