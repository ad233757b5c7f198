//! SeaORM-backed comment store.

use async_trait::async_trait;
use sea_orm::{
    DbConn, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

use quill_core::domain::CommentAdminRow;
use quill_core::error::RepoError;
use quill_core::ports::CommentStore;

use super::entity::{comment, post, user};

/// Comment store backed by SeaORM.
pub struct SeaOrmCommentStore {
    db: DbConn,
}

impl SeaOrmCommentStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct CommentAdminDbRow {
    text: String,
    post_title: String,
    author: String,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[async_trait]
impl CommentStore for SeaOrmCommentStore {
    async fn admin_list(&self) -> Result<Vec<CommentAdminRow>, RepoError> {
        let rows = comment::Entity::find()
            .select_only()
            .columns([comment::Column::Text, comment::Column::PublishedAt])
            .column_as(post::Column::Title, "post_title")
            .column_as(user::Column::Username, "author")
            .join(JoinType::InnerJoin, comment::Relation::Post.def())
            .join(JoinType::InnerJoin, comment::Relation::Author.def())
            .order_by_asc(comment::Column::PublishedAt)
            .into_model::<CommentAdminDbRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CommentAdminRow {
                text: row.text,
                post_title: row.post_title,
                author: row.author,
                published_at: row.published_at.into(),
            })
            .collect())
    }
}
