//! PostgreSQL post store backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL-backed post store.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, new: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(new);
        let model: post::ActiveModel = post.clone().into();
        PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(post)
    }

    async fn insert_many(&self, new: Vec<NewPost>) -> Result<Vec<Post>, StoreError> {
        // SeaORM rejects an INSERT with no values.
        if new.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<Post> = new.into_iter().map(Post::new).collect();
        let models: Vec<post::ActiveModel> = posts.iter().cloned().map(Into::into).collect();
        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let models = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<Post>, StoreError> {
        let model = PostEntity::find().one(&self.db).await.map_err(map_db_err)?;
        Ok(model.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Into::into))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn update_fields(&self, id: Uuid, patch: PostPatch) -> Result<bool, StoreError> {
        // Nothing to merge; report whether the record exists.
        if patch.is_empty() {
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let mut update = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(title) = patch.title {
            update = update.col_expr(post::Column::Title, Expr::value(title));
        }
        if let Some(content) = patch.content {
            update = update.col_expr(post::Column::Content, Expr::value(content));
        }

        let result = update.exec(&self.db).await.map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
