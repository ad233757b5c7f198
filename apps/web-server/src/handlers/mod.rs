//! HTTP handlers and route configuration.

mod admin;
mod health;
mod pages;

#[cfg(test)]
mod tests;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::error::AppResult;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/posts/{slug}", web::get().to(pages::post_detail))
        .route("/tags/{title}", web::get().to(pages::tag_filter))
        .route("/contacts", web::get().to(pages::contacts))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/admin")
                .route("/posts", web::get().to(admin::posts))
                .route("/comments", web::get().to(admin::comments))
                .route("/tags", web::get().to(admin::tags)),
        );
}

/// Render a template into a 200 HTML response.
pub(crate) fn render(
    templates: &tera::Tera,
    name: &str,
    context: &tera::Context,
) -> AppResult<HttpResponse> {
    let body = templates.render(name, context)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
