use sea_orm::DbErr;

/// Errors surfaced by a [`BlogStore`](super::BlogStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The identifier is not a well-formed store identifier.
    #[error("malformed blog id: {0}")]
    MalformedId(String),
    /// The backing database failed.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}
