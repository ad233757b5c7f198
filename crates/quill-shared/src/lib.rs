//! # Quill Shared
//!
//! The context types handed to the template layer, and the pure helpers
//! that shape them from annotated read models. Building a context never
//! touches the database - every count and relation is precomputed.

mod context;

pub use context::{CommentContext, PostContext, PostDetailContext, TagContext};
