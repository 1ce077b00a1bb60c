//! Authors API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorFullName},
};

use super::ApiResponse;

/// List all registered authors
#[utoipa::path(
    get,
    path = "/author/all-authors",
    tag = "authors",
    responses(
        (status = 200, description = "All registered authors, wrapped in the success envelope", body = Vec<Author>)
    )
)]
pub async fn all_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<Author>>>> {
    let authors = state.repository.authors.list().await?;
    Ok(Json(ApiResponse::ok(authors)))
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/author/author-details/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details, wrapped in the success envelope", body = Author),
        (status = 404, description = "No author with this ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn author_details(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state
        .repository
        .authors
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
    Ok(Json(ApiResponse::ok(author)))
}

/// Register a new author from a full-name payload
#[utoipa::path(
    post,
    path = "/author/register-author-by-fullname",
    tag = "authors",
    request_body = AuthorFullName,
    responses(
        (status = 200, description = "Created author, wrapped in the success envelope", body = Author),
        (status = 400, description = "Full name is empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_author_by_fullname(
    State(state): State<crate::AppState>,
    Json(data): Json<AuthorFullName>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.repository.authors.register(&data).await?;
    Ok(Json(ApiResponse::ok(author)))
}

/// Update an existing author's details
#[utoipa::path(
    put,
    path = "/author/update-author/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    request_body = AuthorFullName,
    responses(
        (status = 200, description = "Updated author, wrapped in the success envelope", body = Author),
        (status = 404, description = "No author with this ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<AuthorFullName>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.repository.authors.update(&id, &data).await?;
    Ok(Json(ApiResponse::ok(author)))
}

/// Delete an author by ID (no-op when the ID is unknown)
#[utoipa::path(
    delete,
    path = "/author/delete-author/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted (or was already absent)")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let removed = state.repository.authors.delete(&id).await?;
    let message = if removed > 0 {
        format!("Author {} deleted", id)
    } else {
        format!("Author {} was not present", id)
    };
    Ok(Json(ApiResponse::message(message)))
}
