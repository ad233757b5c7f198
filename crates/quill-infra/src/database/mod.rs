//! Database connection management and SeaORM-backed stores.

mod comment_store;
mod connections;
pub mod entity;
mod post_store;
mod tag_store;

pub use comment_store::SeaOrmCommentStore;
pub use connections::{DatabaseConfig, connect};
pub use post_store::SeaOrmPostStore;
pub use sea_orm::DbConn;
pub use tag_store::SeaOrmTagStore;

#[cfg(test)]
mod tests;
