use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// Document-store port for the post collection.
///
/// Absence is a value here: point lookups return `None` and id-keyed
/// mutations return `false` when no record has the id. `StoreError` is
/// reserved for the store being unreachable or a read/write failing.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert one post, assigning its id and creation timestamp.
    async fn insert(&self, new: NewPost) -> Result<Post, StoreError>;

    /// Insert a batch of posts, returning the stored representations.
    async fn insert_many(&self, new: Vec<NewPost>) -> Result<Vec<Post>, StoreError>;

    /// Every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// An arbitrary stored post, if any exist.
    async fn find_one(&self) -> Result<Option<Post>, StoreError>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Merge the supplied fields into the record with this id, leaving
    /// omitted fields untouched. Returns `false` when the id is unknown.
    async fn update_fields(&self, id: Uuid, patch: PostPatch) -> Result<bool, StoreError>;

    /// Remove the record with this id. Returns `false` when the id is
    /// unknown.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Destructive full wipe. Test isolation only.
    async fn drop_all(&self) -> Result<(), StoreError>;
}
