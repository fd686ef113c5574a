use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::blog::*;
use crate::state::AppState;
use crate::store::BlogId;

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List all blogs",
    description = "Returns every blog in insertion order.",
    responses(
        (status = 200, description = "List of blogs", body = Vec<BlogResponse>),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.store.find_all().await?;
    Ok(Json(blogs.into_iter().map(to_external).collect()))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "Blogs",
    operation_id = "getBlog",
    summary = "Get a blog by ID",
    description = "Returns a single blog. Unknown and malformed IDs both yield 404.",
    params(("id" = String, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog details", body = BlogResponse),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, AppError> {
    let id: BlogId = id.parse()?;

    let model = state.store.find_by_id(&id).await?.ok_or_else(|| {
        tracing::debug!("Blog {id} not found");
        AppError::NotFound("Blog not found".into())
    })?;

    Ok(Json(to_external(model)))
}

#[utoipa::path(
    post,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "createBlog",
    summary = "Create a new blog",
    description = "Creates a blog. `title` and `url` are required; `likes` defaults to 0. Any client-supplied identifier is ignored.",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_blog = validate_for_create(payload)?;

    let model = state.store.insert(new_blog).await?;
    tracing::info!(id = %model.id, title = %model.title, "Blog created");

    Ok((StatusCode::CREATED, Json(to_external(model))))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "Blogs",
    operation_id = "deleteBlog",
    summary = "Delete a blog by ID",
    description = "Deletes a blog. Returns 204 whether or not the blog existed.",
    params(("id" = String, Path, description = "Blog ID")),
    responses(
        (status = 204, description = "Blog deleted or absent"),
        (status = 500, description = "Store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    // Nothing can be stored under a malformed id.
    let Ok(id) = id.parse::<BlogId>() else {
        return Ok(StatusCode::NO_CONTENT);
    };

    if !state.store.delete_by_id(&id).await? {
        tracing::debug!("Blog {id} already absent");
    }

    Ok(StatusCode::NO_CONTENT)
}
