//! Port traits - the seams between the domain and infrastructure.

mod store;

pub use store::{CommentStore, PostStore, TagStore};
