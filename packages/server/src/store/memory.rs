use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BlogId, BlogStore, StoreError};
use crate::entity::blog;
use crate::models::blog::NewBlog;

/// In-process blog store.
///
/// Documents live in a vector so listing preserves insertion order.
#[derive(Default)]
pub struct MemoryBlogStore {
    docs: RwLock<Vec<blog::Model>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn insert(&self, input: NewBlog) -> Result<blog::Model, StoreError> {
        let model = blog::Model {
            id: BlogId::generate().as_uuid(),
            title: input.title,
            author: input.author,
            url: input.url,
            likes: input.likes,
            version: 0,
            created_at: Utc::now(),
        };
        self.docs.write().await.push(model.clone());
        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<blog::Model>, StoreError> {
        Ok(self.docs.read().await.clone())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<blog::Model>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|m| m.id == id.as_uuid()).cloned())
    }

    async fn delete_by_id(&self, id: &BlogId) -> Result<bool, StoreError> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|m| m.id != id.as_uuid());
        Ok(docs.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut docs = self.docs.write().await;
        let removed = docs.len() as u64;
        docs.clear();
        Ok(removed)
    }
}
