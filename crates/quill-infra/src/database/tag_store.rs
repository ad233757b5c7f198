//! SeaORM-backed tag store.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use quill_core::domain::{Tag, TagDigest};
use quill_core::error::RepoError;
use quill_core::ports::TagStore;

use super::entity::{post_tag, tag};

/// Tag store backed by SeaORM.
pub struct SeaOrmTagStore {
    db: DbConn,
}

impl SeaOrmTagStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct TagDigestRow {
    id: Uuid,
    title: String,
    posts_count: i64,
}

/// Tags with their post counts annotated via a grouped left join.
fn annotated_tags() -> Select<tag::Entity> {
    tag::Entity::find()
        .select_only()
        .columns([tag::Column::Id, tag::Column::Title])
        .column_as(post_tag::Column::PostId.count(), "posts_count")
        .join(JoinType::LeftJoin, tag::Relation::PostTags.def())
        .group_by(tag::Column::Id)
        .group_by(tag::Column::Title)
}

#[async_trait]
impl TagStore for SeaOrmTagStore {
    async fn most_popular(&self, limit: u64) -> Result<Vec<TagDigest>, RepoError> {
        let rows = annotated_tags()
            .order_by_desc(post_tag::Column::PostId.count())
            .limit(limit)
            .into_model::<TagDigestRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, RepoError> {
        // Titles are stored lowercase, so normalize the lookup too.
        let result = tag::Entity::find()
            .filter(tag::Column::Title.eq(title.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn admin_list(&self) -> Result<Vec<TagDigest>, RepoError> {
        let rows = annotated_tags()
            .order_by_asc(tag::Column::Title)
            .into_model::<TagDigestRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl From<TagDigestRow> for TagDigest {
    fn from(row: TagDigestRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            posts_count: row.posts_count,
        }
    }
}
