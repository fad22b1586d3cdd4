//! User management service.

use crate::domain::entities::{NewUser, User, UserChanges};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, StoreError};
use std::sync::Arc;
use validator::Validate;

const SAVE_FAILED: &str = "There was an error while saving the user to the database";
const LIST_FAILED: &str = "The users information could not be retrieved.";
const GET_FAILED: &str = "The user information could not be retrieved.";
const UPDATE_FAILED: &str = "The user information could not be modified.";
const REMOVE_FAILED: &str = "The user could not be removed";

/// A user's `name` and `bio`, both present and non-empty.
///
/// [`UserFields::new`] is the only place user input is validated; the HTTP
/// handlers and the admin CLI both go through it before calling the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    bio: String,
}

#[derive(Validate)]
struct RawUserFields {
    #[validate(required, length(min = 1))]
    name: Option<String>,

    #[validate(required, length(min = 1))]
    bio: Option<String>,
}

impl UserFields {
    /// Validates raw input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` or `bio` is missing or empty.
    pub fn new(name: Option<String>, bio: Option<String>) -> Result<Self, AppError> {
        let raw = RawUserFields { name, bio };
        raw.validate()?;

        match (raw.name, raw.bio) {
            (Some(name), Some(bio)) => Ok(Self { name, bio }),
            _ => Err(AppError::missing_user_fields()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }
}

/// Service for the user CRUD operations.
///
/// Input arrives as [`UserFields`], so it is already valid. Each operation
/// delegates to the repository and maps the outcome:
/// - unknown id → [`AppError::NotFound`]
/// - any [`StoreError`] → [`AppError::Internal`] with a fixed per-operation message
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_user(&self, fields: UserFields) -> Result<User, AppError> {
        let UserFields { name, bio } = fields;

        let user = self
            .repository
            .insert(NewUser { name, bio })
            .await
            .map_err(|e| store_failure(e, SAVE_FAILED))?;

        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Lists all users in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository
            .find_all()
            .await
            .map_err(|e| store_failure(e, LIST_FAILED))
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(e, GET_FAILED))?
            .ok_or_else(AppError::user_not_found)
    }

    /// Replaces `name` and `bio` of a user and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_user(&self, id: i64, fields: UserFields) -> Result<User, AppError> {
        let UserFields { name, bio } = fields;

        let user = self
            .repository
            .update(id, UserChanges { name, bio })
            .await
            .map_err(|e| store_failure(e, UPDATE_FAILED))?
            .ok_or_else(AppError::user_not_found)?;

        tracing::info!(user_id = user.id, "user updated");
        Ok(user)
    }

    /// Deletes a user and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self
            .repository
            .remove(id)
            .await
            .map_err(|e| store_failure(e, REMOVE_FAILED))?
            .ok_or_else(AppError::user_not_found)?;

        tracing::info!(user_id = user.id, "user deleted");
        Ok(user)
    }

    /// Checks that the underlying store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the raw [`StoreError`] so callers can report it.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}

fn store_failure(error: StoreError, message: &'static str) -> AppError {
    tracing::error!(error = %error, "{message}");
    AppError::internal(message)
}
