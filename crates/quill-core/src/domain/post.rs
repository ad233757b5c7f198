use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::User;

/// Post entity - a published blog entry.
///
/// Posts are listed newest-first; `published_at` is the ordering key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Create a post authored by `author`. Only staff users may author posts.
    pub fn authored_by(
        author: &User,
        title: String,
        text: String,
        slug: String,
    ) -> Result<Self, DomainError> {
        if !author.is_staff {
            return Err(DomainError::Validation(format!(
                "user {} is not staff and cannot author posts",
                author.username
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            author_id: author.id,
            title,
            text,
            slug,
            image_url: None,
            published_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_user_can_author() {
        let author = User::staff("ada".into(), "ada@example.com".into());
        let post = Post::authored_by(
            &author,
            "Title".into(),
            "Body".into(),
            "title".into(),
        )
        .unwrap();
        assert_eq!(post.author_id, author.id);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn regular_user_cannot_author() {
        let reader = User::new("bob".into(), "bob@example.com".into());
        let result =
            Post::authored_by(&reader, "Title".into(), "Body".into(), "title".into());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
