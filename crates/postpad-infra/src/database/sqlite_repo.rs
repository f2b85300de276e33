//! SQLite repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use postpad_core::domain::Post;
use postpad_core::error::RepoError;
use postpad_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SQLite post repository. Every mutation is a single autocommitted
/// statement; there is no batching.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %new_post.id, "Inserting post");

        let active: post::ActiveModel = new_post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("UNIQUE") || err_str.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn update(&self, changed: Post) -> Result<Post, RepoError> {
        let existing = PostEntity::find()
            .filter(post::Column::Id.eq(changed.id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        // seq stays put: updating a row does not move its insertion order
        let mut active = existing.into_active_model();
        active.title = ActiveValue::Set(changed.title);
        active.date = ActiveValue::Set(changed.updated_at);
        active.image_path = ActiveValue::Set(changed.image_ref);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::Date)
            .order_by_desc(post::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
