//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Request body for `POST /api/users` and `PUT /api/users/{id}`.
///
/// Fields are `Option` so that a missing field reaches
/// [`UserFields::new`](crate::application::services::UserFields::new) and is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
}

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub created: bool,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> UserRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_complete_request() {
        let req = request(serde_json::json!({ "name": "Ada", "bio": "math" }));
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.bio.as_deref(), Some("math"));
    }

    #[test]
    fn test_missing_field_deserializes_as_none() {
        let req = request(serde_json::json!({ "name": "Ada" }));
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert!(req.bio.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req = request(serde_json::json!({ "name": "Ada", "bio": "math", "id": 99 }));
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.bio.as_deref(), Some("math"));
    }
}
