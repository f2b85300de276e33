//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    /// Insertion-order surrogate assigned by SQLite; never leaves this
    /// layer. Enumeration tie-break for equal timestamps.
    #[sea_orm(primary_key)]
    pub seq: i64,
    #[sea_orm(unique)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub date: Option<DateTimeUtc>,
    pub image_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post. `seq` is dropped.
impl From<Model> for postpad_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            updated_at: model.date,
            image_ref: model.image_path,
        }
    }
}

/// Conversion from a domain Post to an insert-ready ActiveModel. `seq`
/// is left unset so SQLite assigns the next insertion-order value.
impl From<postpad_core::domain::Post> for ActiveModel {
    fn from(post: postpad_core::domain::Post) -> Self {
        Self {
            seq: sea_orm::ActiveValue::NotSet,
            id: Set(post.id),
            title: Set(post.title),
            date: Set(post.updated_at),
            image_path: Set(post.image_ref),
        }
    }
}
