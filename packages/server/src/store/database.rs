use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;

use super::{BlogId, BlogStore, StoreError};
use crate::entity::blog;
use crate::models::blog::NewBlog;

/// Blog store backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct DatabaseBlogStore {
    db: DatabaseConnection,
}

impl DatabaseBlogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogStore for DatabaseBlogStore {
    async fn insert(&self, input: NewBlog) -> Result<blog::Model, StoreError> {
        let new_blog = blog::ActiveModel {
            id: Set(BlogId::generate().as_uuid()),
            title: Set(input.title),
            author: Set(input.author),
            url: Set(input.url),
            likes: Set(input.likes),
            version: Set(0),
            created_at: Set(Utc::now()),
        };

        Ok(new_blog.insert(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<blog::Model>, StoreError> {
        let models = blog::Entity::find()
            .order_by_asc(blog::Column::CreatedAt)
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<blog::Model>, StoreError> {
        Ok(blog::Entity::find_by_id(id.as_uuid()).one(&self.db).await?)
    }

    async fn delete_by_id(&self, id: &BlogId) -> Result<bool, StoreError> {
        let res = blog::Entity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let res = blog::Entity::delete_many().exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
