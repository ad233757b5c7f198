use std::sync::Arc;

use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tera::Tera;
use uuid::Uuid;

use quill_core::domain::{
    CommentAdminRow, CommentView, PostAdminRow, PostDetail, PostDigest, Tag, TagDigest,
};
use quill_core::error::RepoError;
use quill_core::ports::{CommentStore, PostStore, TagStore};

use crate::handlers::configure_routes;
use crate::state::AppState;

struct FakePosts {
    digests: Vec<PostDigest>,
    detail: Option<PostDetail>,
}

#[async_trait]
impl PostStore for FakePosts {
    async fn most_popular(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError> {
        Ok(self.digests.iter().take(limit as usize).cloned().collect())
    }

    async fn freshest(&self, limit: u64) -> Result<Vec<PostDigest>, RepoError> {
        Ok(self.digests.iter().take(limit as usize).cloned().collect())
    }

    async fn published_in(&self, year: i32) -> Result<Vec<PostDigest>, RepoError> {
        Ok(self
            .digests
            .iter()
            .filter(|post| post.published_at.year() == year)
            .cloned()
            .collect())
    }

    async fn tagged_with(
        &self,
        _tag_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostDigest>, RepoError> {
        Ok(self.digests.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDetail>, RepoError> {
        Ok(self.detail.clone().filter(|detail| detail.slug == slug))
    }

    async fn admin_list(&self) -> Result<Vec<PostAdminRow>, RepoError> {
        Ok(self
            .digests
            .iter()
            .map(|post| PostAdminRow {
                title: post.title.clone(),
                author: post.author.clone(),
                published_at: post.published_at,
                comments_count: post.comments_count,
            })
            .collect())
    }
}

struct FakeTags {
    tags: Vec<TagDigest>,
}

#[async_trait]
impl TagStore for FakeTags {
    async fn most_popular(&self, limit: u64) -> Result<Vec<TagDigest>, RepoError> {
        Ok(self.tags.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, RepoError> {
        let wanted = title.to_lowercase();
        Ok(self.tags.iter().find(|tag| tag.title == wanted).map(|tag| Tag {
            id: tag.id,
            title: tag.title.clone(),
        }))
    }

    async fn admin_list(&self) -> Result<Vec<TagDigest>, RepoError> {
        Ok(self.tags.clone())
    }
}

struct FakeComments {
    rows: Vec<CommentAdminRow>,
}

#[async_trait]
impl CommentStore for FakeComments {
    async fn admin_list(&self) -> Result<Vec<CommentAdminRow>, RepoError> {
        Ok(self.rows.clone())
    }
}

fn digest(title: &str, slug: &str, tags: Vec<TagDigest>) -> PostDigest {
    PostDigest {
        id: Uuid::new_v4(),
        title: title.into(),
        text: "Body text".into(),
        slug: slug.into(),
        image_url: None,
        published_at: Utc::now(),
        author: "ada".into(),
        like_count: 1,
        comments_count: 2,
        tags,
    }
}

fn rust_tag() -> TagDigest {
    TagDigest {
        id: Uuid::new_v4(),
        title: "rust".into(),
        posts_count: 3,
    }
}

fn state(posts: FakePosts, tags: FakeTags) -> AppState {
    let templates =
        Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).unwrap();
    AppState {
        posts: Arc::new(posts),
        tags: Arc::new(tags),
        comments: Arc::new(FakeComments {
            rows: vec![CommentAdminRow {
                text: "First!".into(),
                post_title: "Hello world".into(),
                author: "bob".into(),
                published_at: Utc::now(),
            }],
        }),
        templates,
    }
}

fn default_state() -> AppState {
    let detail = PostDetail {
        id: Uuid::new_v4(),
        title: "Hello world".into(),
        text: "The full body".into(),
        slug: "hello-world".into(),
        image_url: None,
        published_at: Utc::now(),
        author: "ada".into(),
        like_count: 4,
        tags: vec![rust_tag()],
        comments: vec![CommentView {
            text: "Great read".into(),
            published_at: Utc::now(),
            author: "bob".into(),
        }],
    };
    state(
        FakePosts {
            digests: vec![digest("Hello world", "hello-world", vec![rust_tag()])],
            detail: Some(detail),
        },
        FakeTags {
            tags: vec![rust_tag()],
        },
    )
}

macro_rules! service {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn index_renders_posts_and_tags() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Hello world"));
    assert!(body.contains("rust"));
    assert!(body.contains("Fresh posts"));
}

#[actix_web::test]
async fn index_caps_listings_at_five() {
    let digests = (1..=7)
        .map(|i| digest(&format!("Numbered {i}"), &format!("numbered-{i}"), Vec::new()))
        .collect();
    let app = service!(state(
        FakePosts {
            digests,
            detail: None
        },
        FakeTags { tags: Vec::new() }
    ));

    let req = test::TestRequest::get().uri("/").to_request();
    let body =
        String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

    assert!(body.contains("Numbered 5"));
    assert!(!body.contains("Numbered 6"));
    assert!(!body.contains("Numbered 7"));
}

#[actix_web::test]
async fn post_detail_renders_comments_and_likes() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/posts/hello-world").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("The full body"));
    assert!(body.contains("Great read"));
    assert!(body.contains("4 likes"));
}

#[actix_web::test]
async fn unknown_slug_is_not_found() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/posts/missing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("404"));
}

#[actix_web::test]
async fn tag_filter_lists_tagged_posts() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/tags/rust").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Posts tagged"));
    assert!(body.contains("Hello world"));
}

#[actix_web::test]
async fn tag_lookup_ignores_casing() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/tags/RuSt").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn unknown_tag_is_not_found() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/tags/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn contacts_page_renders() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/contacts").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn health_check_reports_ok() {
    let app = service!(default_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn admin_lists_render_tables() {
    for uri in ["/admin/posts", "/admin/comments", "/admin/tags"] {
        let app = service!(default_state());
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "{uri} failed");
    }
}
