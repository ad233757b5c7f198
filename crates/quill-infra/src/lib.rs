//! # Quill Infra
//!
//! Infrastructure implementations for the Quill blog: SeaORM entities,
//! connection management, and the store adapters behind the domain ports.

pub mod database;
