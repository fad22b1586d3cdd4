//! Core domain entities.
//!
//! - [`User`] - A persisted user record
//! - [`NewUser`] - Input for creating a user
//! - [`UserChanges`] - Full replacement of a user's editable fields

pub mod user;

pub use user::{NewUser, User, UserChanges};
