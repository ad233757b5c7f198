//! Admin list views over posts, comments and tags.

use actix_web::{HttpResponse, web};

use super::render;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /admin/posts
pub async fn posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let rows = state.posts.admin_list().await?;

    let mut context = tera::Context::new();
    context.insert("posts", &rows);

    render(&state.templates, "admin/posts.html", &context)
}

/// GET /admin/comments
pub async fn comments(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let rows = state.comments.admin_list().await?;

    let mut context = tera::Context::new();
    context.insert("comments", &rows);

    render(&state.templates, "admin/comments.html", &context)
}

/// GET /admin/tags
pub async fn tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let rows = state.tags.admin_list().await?;

    let mut context = tera::Context::new();
    context.insert("tags", &rows);

    render(&state.templates, "admin/tags.html", &context)
}
