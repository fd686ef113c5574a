mod error;

pub mod database;
pub mod memory;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::blog;
use crate::models::blog::NewBlog;

pub use database::DatabaseBlogStore;
pub use error::StoreError;
pub use memory::MemoryBlogStore;

/// Store-assigned blog identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Generate a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for BlogId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for BlogId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::MalformedId(s.to_string()))
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Document store holding the blog collection.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Persist a validated blog and return the stored document.
    ///
    /// The store assigns the identifier, the initial version and the
    /// creation timestamp.
    async fn insert(&self, input: NewBlog) -> Result<blog::Model, StoreError>;

    /// All stored blogs in insertion order.
    async fn find_all(&self) -> Result<Vec<blog::Model>, StoreError>;

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<blog::Model>, StoreError>;

    /// Delete a blog by identifier.
    ///
    /// Returns `true` if the blog was deleted, `false` if it did not exist.
    async fn delete_by_id(&self, id: &BlogId) -> Result<bool, StoreError>;

    /// Remove every blog, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
