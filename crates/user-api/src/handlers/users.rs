//! User handlers
//!
//! CRUD endpoints for the user resource.

use axum::{extract::State, Json};
use user_service::dto::{
    CreateUserRequest, ListUsersResponse, UpdateUserRequest, UserEnvelope,
};

use crate::extractors::{PageQuery, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserEnvelope>>> {
    let new_user = request.into_new_user()?;
    let user = state.users().create_user(new_user).await?;
    Ok(Created(Json(user.into())))
}

/// Get user by ID
///
/// GET /users/{id}
pub async fn get_user_info(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<Json<UserEnvelope>> {
    let user = state.users().get_user_by_id(id).await?;
    Ok(Json(user.into()))
}

/// List users a page at a time
///
/// GET /users?page={page}&page_size={page_size}
pub async fn list_users(
    State(state): State<AppState>,
    PageQuery(query): PageQuery,
) -> ApiResult<Json<ListUsersResponse>> {
    let (page, page_size) = (query.page(), query.page_size());
    let (users, total) = state.users().list_users(query.offset(), page_size).await?;
    Ok(Json(ListUsersResponse::new(users, total, page, page_size)))
}

/// Replace every mutable field of an existing user
///
/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let changes = request.into_new_user()?;
    let users = state.users();

    let mut user = users.get_user_by_id(id).await?;
    user.apply(changes);
    let user = users.update_user(user).await?;

    Ok(Json(user.into()))
}

/// Soft delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> ApiResult<NoContent> {
    state.users().delete_user(id).await?;
    Ok(NoContent)
}
