//! Public page handlers: index, post detail, tag filter, contacts.

use actix_web::{HttpResponse, web};

use quill_core::domain::{PostDigest, TagDigest};
use quill_shared::{PostContext, PostDetailContext, TagContext};

use super::render;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Sidebar and listing slice sizes.
const TOP_POSTS: u64 = 5;
const TOP_TAGS: u64 = 5;
const TAG_PAGE_POSTS: u64 = 20;

fn post_cards(posts: &[PostDigest]) -> Vec<PostContext> {
    posts.iter().map(PostContext::from).collect()
}

fn tag_cards(tags: &[TagDigest]) -> Vec<TagContext> {
    tags.iter().map(TagContext::from).collect()
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let most_popular_posts = state.posts.most_popular(TOP_POSTS).await?;
    let page_posts = state.posts.freshest(TOP_POSTS).await?;
    let popular_tags = state.tags.most_popular(TOP_TAGS).await?;

    let mut context = tera::Context::new();
    context.insert("most_popular_posts", &post_cards(&most_popular_posts));
    context.insert("page_posts", &post_cards(&page_posts));
    context.insert("popular_tags", &tag_cards(&popular_tags));

    render(&state.templates, "index.html", &context)
}

/// GET /posts/{slug}
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{slug}'")))?;

    let most_popular_posts = state.posts.most_popular(TOP_POSTS).await?;
    let popular_tags = state.tags.most_popular(TOP_TAGS).await?;

    let mut context = tera::Context::new();
    context.insert("post", &PostDetailContext::from(&post));
    context.insert("most_popular_posts", &post_cards(&most_popular_posts));
    context.insert("popular_tags", &tag_cards(&popular_tags));

    render(&state.templates, "post-details.html", &context)
}

/// GET /tags/{title}
pub async fn tag_filter(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let title = path.into_inner();

    let tag = state
        .tags
        .find_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no tag '{title}'")))?;

    let posts = state.posts.tagged_with(tag.id, TAG_PAGE_POSTS).await?;
    let most_popular_posts = state.posts.most_popular(TOP_POSTS).await?;
    let popular_tags = state.tags.most_popular(TOP_TAGS).await?;

    let mut context = tera::Context::new();
    context.insert("tag", &tag.title);
    context.insert("posts", &post_cards(&posts));
    context.insert("most_popular_posts", &post_cards(&most_popular_posts));
    context.insert("popular_tags", &tag_cards(&popular_tags));

    render(&state.templates, "posts-list.html", &context)
}

/// GET /contacts
pub async fn contacts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&state.templates, "contacts.html", &tera::Context::new())
}
