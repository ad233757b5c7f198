use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an author of posts and comments, or a reader who likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a regular user with generated ID.
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            is_staff: false,
            created_at: Utc::now(),
        }
    }

    /// Create a staff user. Only staff may author posts.
    pub fn staff(username: String, email: String) -> Self {
        Self {
            is_staff: true,
            ..Self::new(username, email)
        }
    }
}
