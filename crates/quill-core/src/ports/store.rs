use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    CommentAdminRow, PostAdminRow, PostDetail, PostDigest, Tag, TagDigest,
};
use crate::error::RepoError;

/// Derived views over the post collection.
///
/// Every method returns rows in a specified order with all annotations
/// attached; implementations must not issue one query per returned row.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Top `limit` posts by like count, ties broken newest-first.
    async fn most_popular(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError>;

    /// The `limit` most recently published posts.
    async fn freshest(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError>;

    /// Posts published in a calendar year, oldest first.
    async fn published_in(&self, year: i32) -> Result<Vec<PostDigest>, RepoError>;

    /// Up to `limit` posts carrying the given tag, newest first.
    async fn tagged_with(&self, tag_id: Uuid, limit: u64)
    -> Result<Vec<PostDigest>, RepoError>;

    /// A single post by slug, hydrated with comments, likes and tags.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDetail>, RepoError>;

    /// All posts for the admin list, newest first.
    async fn admin_list(&self) -> Result<Vec<PostAdminRow>, RepoError>;
}

/// Derived views over the tag collection.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Top `limit` tags by number of referencing posts.
    async fn most_popular(&self, limit: u64) -> Result<Vec<TagDigest>, RepoError>;

    /// A single tag by title. Lookup is case-insensitive since titles are
    /// stored lowercase.
    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, RepoError>;

    /// All tags with post counts for the admin list, alphabetical.
    async fn admin_list(&self) -> Result<Vec<TagDigest>, RepoError>;
}

/// Comment listings outside a single post's detail page.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// All comments with post titles and author names, oldest first.
    async fn admin_list(&self) -> Result<Vec<CommentAdminRow>, RepoError>;
}
