//! PostgreSQL repository tests.
//!
//! Run with a database available:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_user -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use user_api::domain::entities::{NewUser, UserChanges};
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::PgUserRepository;

fn new_user(name: &str, bio: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        bio: bio.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.insert(new_user("Ada", "math")).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_in_id_order(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let first = repo.insert(new_user("Ada", "math")).await.unwrap();
    let second = repo.insert(new_user("Alan", "logic")).await.unwrap();

    let all = repo.find_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_returns_post_update_row(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
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

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.bio, "CS");
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_returns_none(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999_999,
            UserChanges {
                name: "x".to_string(),
                bio: "y".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_remove_returns_removed_row(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.insert(new_user("Ada", "math")).await.unwrap();

    let removed = repo.remove(created.id).await.unwrap();

    assert_eq!(removed, Some(created.clone()));
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(repo.remove(created.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
