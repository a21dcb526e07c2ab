//! In-memory post store - the default backend and the fallback when no
//! database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// In-memory post collection behind an async RwLock.
///
/// Implements the full store contract. Note: data is lost on process
/// restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, new: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(new);
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, new: Vec<NewPost>) -> Result<Vec<Post>, StoreError> {
        let inserted: Vec<Post> = new.into_iter().map(Post::new).collect();
        let mut posts = self.posts.write().await;
        posts.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_one(&self) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn update_fields(&self, id: Uuid, patch: PostPatch) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        self.posts.write().await.clear();
        Ok(())
    }
}
