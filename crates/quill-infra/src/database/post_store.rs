//! SeaORM-backed post store.
//!
//! All aggregate counts are attached via grouped joins or a single auxiliary
//! `GROUP BY` query per page, never one query per row.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use quill_core::domain::{CommentView, PostAdminRow, PostDetail, PostDigest, TagDigest};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::entity::{comment, post, post_like, post_tag, tag, user};

/// Post store backed by SeaORM.
pub struct SeaOrmPostStore {
    db: DbConn,
}

impl SeaOrmPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// A post row with its author name and like count annotated.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: Uuid,
    title: String,
    text: String,
    slug: String,
    image_url: Option<String>,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
    author: String,
    like_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct PostDetailRow {
    id: Uuid,
    title: String,
    text: String,
    slug: String,
    image_url: Option<String>,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
    author: String,
}

#[derive(Debug, FromQueryResult)]
struct CommentRow {
    text: String,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
    author: String,
}

#[derive(Debug, FromQueryResult)]
struct CommentCountRow {
    post_id: Uuid,
    comments_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct PostTagRow {
    post_id: Uuid,
    tag_id: Uuid,
    title: String,
}

#[derive(Debug, FromQueryResult)]
struct TagCountRow {
    tag_id: Uuid,
    posts_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct PostAdminDbRow {
    title: String,
    author: String,
    published_at: sea_orm::prelude::DateTimeWithTimeZone,
    comments_count: i64,
}

/// Base listing query: post columns plus author name and like count,
/// one row per post.
fn annotated_posts() -> Select<post::Entity> {
    post::Entity::find()
        .select_only()
        .columns([
            post::Column::Id,
            post::Column::Title,
            post::Column::Text,
            post::Column::Slug,
            post::Column::ImageUrl,
            post::Column::PublishedAt,
        ])
        .column_as(user::Column::Username, "author")
        .column_as(post_like::Column::UserId.count(), "like_count")
        .join(JoinType::InnerJoin, post::Relation::Author.def())
        .join(JoinType::LeftJoin, post::Relation::Likes.def())
        .group_by(post::Column::Id)
        .group_by(user::Column::Username)
}

impl SeaOrmPostStore {
    /// Attach comment counts and tag lists to a fetched page of rows.
    async fn hydrate(&self, rows: Vec<PostRow>) -> Result<Vec<PostDigest>, RepoError> {
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let comment_counts = self.comment_counts(&ids).await?;
        let mut tags = self.tags_for_posts(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| PostDigest {
                comments_count: comment_counts.get(&row.id).copied().unwrap_or(0),
                tags: tags.remove(&row.id).unwrap_or_default(),
                id: row.id,
                title: row.title,
                text: row.text,
                slug: row.slug,
                image_url: row.image_url,
                published_at: row.published_at.into(),
                author: row.author,
                like_count: row.like_count,
            })
            .collect())
    }

    /// One aggregate query for the whole page; ids without comments are
    /// simply absent from the map.
    async fn comment_counts(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, RepoError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = comment::Entity::find()
            .select_only()
            .column(comment::Column::PostId)
            .column_as(comment::Column::Id.count(), "comments_count")
            .filter(comment::Column::PostId.is_in(ids.iter().copied()))
            .group_by(comment::Column::PostId)
            .into_model::<CommentCountRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| (row.post_id, row.comments_count))
            .collect())
    }

    /// Bulk-prefetch the page's tags: one query for the post→tag pairs and
    /// one for the per-tag post counts.
    async fn tags_for_posts(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<TagDigest>>, RepoError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let pairs = post_tag::Entity::find()
            .select_only()
            .column(post_tag::Column::PostId)
            .column_as(tag::Column::Id, "tag_id")
            .column_as(tag::Column::Title, "title")
            .join(JoinType::InnerJoin, post_tag::Relation::Tag.def())
            .filter(post_tag::Column::PostId.is_in(ids.iter().copied()))
            .order_by_asc(tag::Column::Title)
            .into_model::<PostTagRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let mut tag_ids: Vec<Uuid> = pairs.iter().map(|pair| pair.tag_id).collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();
        let posts_counts = self.tag_post_counts(&tag_ids).await?;

        let mut by_post: HashMap<Uuid, Vec<TagDigest>> = HashMap::new();
        for pair in pairs {
            by_post.entry(pair.post_id).or_default().push(TagDigest {
                id: pair.tag_id,
                title: pair.title,
                posts_count: posts_counts.get(&pair.tag_id).copied().unwrap_or(0),
            });
        }
        Ok(by_post)
    }

    async fn tag_post_counts(
        &self,
        tag_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, RepoError> {
        if tag_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = post_tag::Entity::find()
            .select_only()
            .column(post_tag::Column::TagId)
            .column_as(post_tag::Column::PostId.count(), "posts_count")
            .filter(post_tag::Column::TagId.is_in(tag_ids.iter().copied()))
            .group_by(post_tag::Column::TagId)
            .into_model::<TagCountRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| (row.tag_id, row.posts_count))
            .collect())
    }
}

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn most_popular(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError> {
        let rows = annotated_posts()
            .order_by_desc(post_like::Column::UserId.count())
            .order_by_desc(post::Column::PublishedAt)
            .limit(limit)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        self.hydrate(rows).await
    }

    async fn freshest(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError> {
        let rows = annotated_posts()
            .order_by_desc(post::Column::PublishedAt)
            .limit(limit)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        self.hydrate(rows).await
    }

    async fn published_in(&self, year: i32) -> Result<Vec<PostDigest>, RepoError> {
        let Some((start, end)) = year_bounds(year) else {
            return Ok(Vec::new());
        };

        let rows = annotated_posts()
            .filter(post::Column::PublishedAt.gte(start))
            .filter(post::Column::PublishedAt.lt(end))
            .order_by_asc(post::Column::PublishedAt)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        self.hydrate(rows).await
    }

    async fn tagged_with(
        &self,
        tag_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostDigest>, RepoError> {
        let rows = annotated_posts()
            .join(JoinType::InnerJoin, post::Relation::PostTags.def())
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_desc(post::Column::PublishedAt)
            .limit(limit)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        self.hydrate(rows).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDetail>, RepoError> {
        tracing::debug!(slug, "Finding post by slug");

        let row = post::Entity::find()
            .select_only()
            .columns([
                post::Column::Id,
                post::Column::Title,
                post::Column::Text,
                post::Column::Slug,
                post::Column::ImageUrl,
                post::Column::PublishedAt,
            ])
            .column_as(user::Column::Username, "author")
            .join(JoinType::InnerJoin, post::Relation::Author.def())
            .filter(post::Column::Slug.eq(slug))
            .into_model::<PostDetailRow>()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let like_count = post_like::Entity::find()
            .filter(post_like::Column::PostId.eq(row.id))
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let comments = comment::Entity::find()
            .select_only()
            .columns([comment::Column::Text, comment::Column::PublishedAt])
            .column_as(user::Column::Username, "author")
            .join(JoinType::InnerJoin, comment::Relation::Author.def())
            .filter(comment::Column::PostId.eq(row.id))
            .order_by_asc(comment::Column::PublishedAt)
            .into_model::<CommentRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let tags = self
            .tags_for_posts(&[row.id])
            .await?
            .remove(&row.id)
            .unwrap_or_default();

        Ok(Some(PostDetail {
            id: row.id,
            title: row.title,
            text: row.text,
            slug: row.slug,
            image_url: row.image_url,
            published_at: row.published_at.into(),
            author: row.author,
            like_count: like_count as i64,
            tags,
            comments: comments
                .into_iter()
                .map(|c| CommentView {
                    text: c.text,
                    published_at: c.published_at.into(),
                    author: c.author,
                })
                .collect(),
        }))
    }

    async fn admin_list(&self) -> Result<Vec<PostAdminRow>, RepoError> {
        let rows = post::Entity::find()
            .select_only()
            .columns([post::Column::Title, post::Column::PublishedAt])
            .column_as(user::Column::Username, "author")
            .column_as(comment::Column::Id.count(), "comments_count")
            .join(JoinType::InnerJoin, post::Relation::Author.def())
            .join(JoinType::LeftJoin, post::Relation::Comments.def())
            .group_by(post::Column::Id)
            .group_by(user::Column::Username)
            .order_by_desc(post::Column::PublishedAt)
            .into_model::<PostAdminDbRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PostAdminRow {
                title: row.title,
                author: row.author,
                published_at: row.published_at.into(),
                comments_count: row.comments_count,
            })
            .collect())
    }
}

/// Half-open UTC bounds of a calendar year; `None` for years chrono
/// cannot represent.
fn year_bounds(
    year: i32,
) -> Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some((start.and_utc(), end.and_utc()))
}
