use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::blog;
use crate::error::AppError;

/// Candidate blog posted by a client.
///
/// Unknown fields such as `_id`, `id` or `__v` are ignored; the store always
/// assigns its own identifier.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    #[schema(example = "React patterns")]
    pub title: Option<String>,
    #[schema(example = "Michael Chan")]
    pub author: Option<String>,
    #[schema(example = "https://reactpatterns.com/")]
    pub url: Option<String>,
    /// Defaults to 0 when absent.
    #[schema(example = 7, minimum = 0)]
    pub likes: Option<i64>,
}

/// A blog that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// External representation of a stored blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogResponse {
    #[schema(example = "01927b3e-5c4f-7a8e-9d41-3f2b8c6a1e07")]
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

pub fn validate_for_create(req: CreateBlogRequest) -> Result<NewBlog, AppError> {
    let title = required(req.title, "Title")?;
    let url = required(req.url, "Url")?;

    let likes = req.likes.unwrap_or(0);
    if likes < 0 {
        return Err(AppError::Validation("Likes must be >= 0".into()));
    }

    Ok(NewBlog {
        title,
        author: req.author,
        url,
        likes,
    })
}

/// Shape a stored document for API callers.
///
/// Only the identifier and the four business fields survive; store
/// bookkeeping (`version`, `created_at`) is dropped. Every handler that
/// returns a blog goes through here.
pub fn to_external(model: blog::Model) -> BlogResponse {
    BlogResponse {
        id: model.id.to_string(),
        title: model.title,
        author: model.author,
        url: model.url,
        likes: model.likes,
    }
}
