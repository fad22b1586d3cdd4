//! User entity, the single resource managed by the service.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted user.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `name` and `bio` are always non-empty for a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        name: String,
        bio: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            bio,
            created_at,
            updated_at,
        }
    }

    /// Replaces the mutable fields, keeping `id` and `created_at`.
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        self.name = changes.name;
        self.bio = changes.bio;
        self.updated_at = now;
    }
}

/// Input data for inserting a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub bio: String,
}

/// Full replacement of a user's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
    pub bio: String,
}
