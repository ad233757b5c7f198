//! Domain entities and the annotated read models the pages are built from.

mod comment;
mod post;
mod tag;
mod user;
mod views;

pub use comment::Comment;
pub use post::Post;
pub use tag::Tag;
pub use user::User;
pub use views::{
    CommentAdminRow, CommentView, PostAdminRow, PostDetail, PostDigest, TagDigest,
};
