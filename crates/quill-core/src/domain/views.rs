//! Annotated read models.
//!
//! These carry a row plus every aggregate the pages need (like counts,
//! comment counts, tag lists), so rendering never goes back to the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tag together with the number of posts referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDigest {
    pub id: Uuid,
    pub title: String,
    pub posts_count: i64,
}

/// A post row for listings: author name and all counts precomputed,
/// tags bulk-prefetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDigest {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub like_count: i64,
    pub comments_count: i64,
    pub tags: Vec<TagDigest>,
}

/// A comment as shown under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

/// A fully hydrated post for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub like_count: i64,
    pub tags: Vec<TagDigest>,
    pub comments: Vec<CommentView>,
}

/// One row of the admin post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAdminRow {
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub comments_count: i64,
}

/// One row of the admin comment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAdminRow {
    pub text: String,
    pub post_title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
}
