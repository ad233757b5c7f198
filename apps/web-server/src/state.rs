//! Application state - shared across all handlers.

use std::sync::Arc;

use tera::Tera;

use quill_core::ports::{CommentStore, PostStore, TagStore};
use quill_infra::database::{DbConn, SeaOrmCommentStore, SeaOrmPostStore, SeaOrmTagStore};

/// Shared application state: the stores behind their ports and the parsed
/// template set.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub tags: Arc<dyn TagStore>,
    pub comments: Arc<dyn CommentStore>,
    pub templates: Tera,
}

impl AppState {
    /// Build the application state over a database connection.
    pub fn new(db: DbConn, templates: Tera) -> Self {
        Self {
            posts: Arc::new(SeaOrmPostStore::new(db.clone())),
            tags: Arc::new(SeaOrmTagStore::new(db.clone())),
            comments: Arc::new(SeaOrmCommentStore::new(db)),
            templates,
        }
    }
}
