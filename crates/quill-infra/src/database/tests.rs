use std::collections::BTreeMap;

use sea_orm::{ActiveModelBehavior, ActiveValue, DatabaseBackend, MockDatabase, Set, Value};
use uuid::Uuid;

use quill_core::ports::{CommentStore, PostStore, TagStore};

use super::comment_store::SeaOrmCommentStore;
use super::entity::tag;
use super::post_store::SeaOrmPostStore;
use super::tag_store::SeaOrmTagStore;

fn row(values: Vec<(&'static str, Value)>) -> BTreeMap<&'static str, Value> {
    values.into_iter().collect()
}

#[tokio::test]
async fn most_popular_zips_counts_and_tags_onto_the_page() {
    let liked = Uuid::new_v4();
    let quiet = Uuid::new_v4();
    let rust_tag = Uuid::new_v4();
    let now = chrono::Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // page of annotated post rows
        .append_query_results([vec![
            row(vec![
                ("id", liked.into()),
                ("title", "Most liked".into()),
                ("text", "Body".into()),
                ("slug", "most-liked".into()),
                ("image_url", Option::<String>::None.into()),
                ("published_at", now.into()),
                ("author", "ada".into()),
                ("like_count", 3i64.into()),
            ]),
            row(vec![
                ("id", quiet.into()),
                ("title", "Quiet one".into()),
                ("text", "Body".into()),
                ("slug", "quiet-one".into()),
                ("image_url", Option::<String>::None.into()),
                ("published_at", now.into()),
                ("author", "ada".into()),
                ("like_count", 0i64.into()),
            ]),
        ]])
        // one auxiliary comment-count query for the whole page
        .append_query_results([vec![row(vec![
            ("post_id", liked.into()),
            ("comments_count", 2i64.into()),
        ])]])
        // bulk tag prefetch: pairs, then per-tag post counts
        .append_query_results([vec![row(vec![
            ("post_id", liked.into()),
            ("tag_id", rust_tag.into()),
            ("title", "rust".into()),
        ])]])
        .append_query_results([vec![row(vec![
            ("tag_id", rust_tag.into()),
            ("posts_count", 5i64.into()),
        ])]])
        .into_connection();

    let store = SeaOrmPostStore::new(db);
    let page = store.most_popular(5).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].slug, "most-liked");
    assert_eq!(page[0].like_count, 3);
    assert_eq!(page[0].comments_count, 2);
    assert_eq!(page[0].tags.len(), 1);
    assert_eq!(page[0].tags[0].title, "rust");
    assert_eq!(page[0].tags[0].posts_count, 5);

    // absent from both aggregate maps: defaults, no extra queries
    assert_eq!(page[1].comments_count, 0);
    assert!(page[1].tags.is_empty());
}

#[tokio::test]
async fn empty_page_skips_the_aggregate_queries() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let store = SeaOrmPostStore::new(db);
    let page = store.freshest(5).await.unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
async fn find_by_slug_hydrates_the_detail_page() {
    let post_id = Uuid::new_v4();
    let tag_id = Uuid::new_v4();
    let now = chrono::Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(vec![
            ("id", post_id.into()),
            ("title", "Hello".into()),
            ("text", "Full body".into()),
            ("slug", "hello".into()),
            ("image_url", Some("https://img.example/1.png".to_owned()).into()),
            ("published_at", now.into()),
            ("author", "ada".into()),
        ])]])
        // like count
        .append_query_results([vec![row(vec![("num_items", 4i64.into())])]])
        // comments, oldest first
        .append_query_results([vec![
            row(vec![
                ("text", "First!".into()),
                ("published_at", now.into()),
                ("author", "bob".into()),
            ]),
            row(vec![
                ("text", "Nice".into()),
                ("published_at", now.into()),
                ("author", "eve".into()),
            ]),
        ]])
        // tag prefetch for the single id
        .append_query_results([vec![row(vec![
            ("post_id", post_id.into()),
            ("tag_id", tag_id.into()),
            ("title", "intro".into()),
        ])]])
        .append_query_results([vec![row(vec![
            ("tag_id", tag_id.into()),
            ("posts_count", 1i64.into()),
        ])]])
        .into_connection();

    let store = SeaOrmPostStore::new(db);
    let detail = store.find_by_slug("hello").await.unwrap().unwrap();

    assert_eq!(detail.title, "Hello");
    assert_eq!(detail.like_count, 4);
    assert_eq!(detail.comments.len(), 2);
    assert_eq!(detail.comments[0].author, "bob");
    assert_eq!(detail.tags[0].title, "intro");
    assert_eq!(
        detail.image_url.as_deref(),
        Some("https://img.example/1.png")
    );
}

#[tokio::test]
async fn find_by_slug_returns_none_for_unknown_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let store = SeaOrmPostStore::new(db);
    let result = store.find_by_slug("missing").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn popular_tags_carry_their_post_counts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            row(vec![
                ("id", Uuid::new_v4().into()),
                ("title", "rust".into()),
                ("posts_count", 7i64.into()),
            ]),
            row(vec![
                ("id", Uuid::new_v4().into()),
                ("title", "web".into()),
                ("posts_count", 2i64.into()),
            ]),
        ]])
        .into_connection();

    let store = SeaOrmTagStore::new(db);
    let tags = store.most_popular(5).await.unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].title, "rust");
    assert_eq!(tags[0].posts_count, 7);
}

#[tokio::test]
async fn tag_titles_are_lowercased_before_save() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let model = tag::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("RuSt".to_owned()),
    };
    let model = model.before_save(&db, true).await.unwrap();

    assert_eq!(model.title, ActiveValue::Set("rust".to_owned()));
}

#[tokio::test]
async fn comment_admin_list_joins_post_and_author() {
    let now = chrono::Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(vec![
            ("text", "First!".into()),
            ("post_title", "Hello".into()),
            ("author", "bob".into()),
            ("published_at", now.into()),
        ])]])
        .into_connection();

    let store = SeaOrmCommentStore::new(db);
    let list = store.admin_list().await.unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].post_title, "Hello");
    assert_eq!(list[0].author, "bob");
}
