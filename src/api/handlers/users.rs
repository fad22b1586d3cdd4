//! Handlers for the user CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::user::{CreatedUserResponse, UserRequest};
use crate::application::services::UserFields;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Parses the `{id}` path segment.
///
/// Only canonical ids (ASCII digits, no sign, no leading zero) name a user.
/// Anything else, including a segment that failed to decode, is answered
/// like any other unknown id.
fn parse_user_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Ok(Path(raw)) = path else {
        return Err(AppError::user_not_found());
    };

    if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::user_not_found());
    }

    raw.parse().map_err(|_| AppError::user_not_found())
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "bio": "math" }
/// ```
///
/// # Errors
///
/// Returns 400 if `name` or `bio` is missing, empty, or the body is not JSON.
/// Returns 500 if the user could not be saved.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let Json(payload) = payload?;
    let fields = UserFields::new(payload.name, payload.bio)?;

    let user = state.user_service.create_user(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            created: true,
            user,
        }),
    ))
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    let id = parse_user_id(id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Replaces a user's `name` and `bio`.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// Responds with the user as stored after the update.
///
/// # Errors
///
/// Returns 400 if `name` or `bio` is missing or empty. Checked before the lookup.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(payload) = payload?;
    let fields = UserFields::new(payload.name, payload.bio)?;

    let id = parse_user_id(id)?;
    let user = state.user_service.update_user(id, fields).await?;

    Ok(Json(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// Responds with the removed record.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    let id = parse_user_id(id)?;
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(user))
}
