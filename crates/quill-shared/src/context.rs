use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::{CommentView, PostDetail, PostDigest, TagDigest};

const TEASER_CHARS: usize = 200;

/// A tag as the templates see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagContext {
    pub title: String,
    pub posts_with_tag: i64,
}

impl From<&TagDigest> for TagContext {
    fn from(tag: &TagDigest) -> Self {
        Self {
            title: tag.title.clone(),
            posts_with_tag: tag.posts_count,
        }
    }
}

/// A post card on a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContext {
    pub title: String,
    pub teaser_text: String,
    pub author: String,
    pub comments_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<TagContext>,
    pub first_tag_title: Option<String>,
}

impl From<&PostDigest> for PostContext {
    fn from(post: &PostDigest) -> Self {
        Self {
            title: post.title.clone(),
            teaser_text: teaser(&post.text),
            author: post.author.clone(),
            comments_amount: post.comments_count,
            image_url: post.image_url.clone(),
            published_at: post.published_at,
            slug: post.slug.clone(),
            tags: post.tags.iter().map(TagContext::from).collect(),
            first_tag_title: post.tags.first().map(|tag| tag.title.clone()),
        }
    }
}

/// A comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentContext {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

impl From<&CommentView> for CommentContext {
    fn from(comment: &CommentView) -> Self {
        Self {
            text: comment.text.clone(),
            published_at: comment.published_at,
            author: comment.author.clone(),
        }
    }
}

/// The full post on its detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailContext {
    pub title: String,
    pub text: String,
    pub author: String,
    pub comments: Vec<CommentContext>,
    pub likes_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<TagContext>,
}

impl From<&PostDetail> for PostDetailContext {
    fn from(post: &PostDetail) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            author: post.author.clone(),
            comments: post.comments.iter().map(CommentContext::from).collect(),
            likes_amount: post.like_count,
            image_url: post.image_url.clone(),
            published_at: post.published_at,
            slug: post.slug.clone(),
            tags: post.tags.iter().map(TagContext::from).collect(),
        }
    }
}

/// First `TEASER_CHARS` characters of the body, never splitting a
/// multi-byte character.
fn teaser(text: &str) -> String {
    text.chars().take(TEASER_CHARS).collect()
}
