//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::user_service::UserService`] - User CRUD with validation and error mapping

pub mod services;
