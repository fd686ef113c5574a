use sea_orm::entity::prelude::*;

/// A stored blog document.
///
/// `version` and `created_at` are store bookkeeping and never leave the
/// service. The model has no serde derives; responses are built with
/// [`crate::models::blog::to_external`].
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    /// UUIDv7 primary key, assigned on insert.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,

    /// Revision marker, starts at 0.
    pub version: i32,

    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
