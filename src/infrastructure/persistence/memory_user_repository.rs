//! In-memory implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User, UserChanges};
use crate::domain::repositories::UserRepository;
use crate::error::StoreError;

/// A user store that keeps everything in process memory.
///
/// Ids start at 1 and are never reused, even after a delete. Iteration order
/// is ascending id, matching the PostgreSQL store.
///
/// # Use Cases
///
/// - Running the API without a database
/// - HTTP integration tests
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

struct Inner {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory user store");
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let user = User::new(id, new_user.name, new_user.bio, now, now);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;

        Ok(inner.users.get_mut(&id).map(|user| {
            user.apply(changes, Utc::now());
            user.clone()
        }))
    }

    async fn remove(&self, id: i64) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.remove(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, bio: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            bio: bio.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(new_user("Ada", "math")).await.unwrap();
        let second = repo.insert(new_user("Alan", "logic")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(new_user("Ada", "math")).await.unwrap();
        repo.remove(first.id).await.unwrap();
        let second = repo.insert(new_user("Alan", "logic")).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["a", "b", "c"] {
            repo.insert(new_user(name, "bio")).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|u| u.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_returns_post_update_record() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(new_user("Ada", "math")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UserChanges {
                    name: "Ada".to_string(),
                    bio: "CS".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.bio, "CS");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().bio, "CS");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .update(
                5,
                UserChanges {
                    name: "x".to_string(),
                    bio: "y".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("Ada", "math")).await.unwrap();

        assert!(repo.remove(99).await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
