//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User, UserChanges};
use crate::error::StoreError;
use async_trait::async_trait;

/// Persistence contract for users.
///
/// Implementations report "no such user" as `Ok(None)` and reserve
/// [`StoreError`] for failures of the store itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns it with its assigned id and timestamps.
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Returns every user in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Replaces `name` and `bio` of an existing user.
    ///
    /// Returns the user as it is after the update, or `None` if no user has
    /// this id.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, StoreError>;

    /// Removes a user and returns the removed record, or `None` if no user
    /// has this id.
    async fn remove(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
