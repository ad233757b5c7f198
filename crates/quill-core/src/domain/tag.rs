use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag entity. Titles are unique and always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub title: String,
}

impl Tag {
    /// Create a tag, normalizing the title to lowercase.
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_lowercased() {
        assert_eq!(Tag::new("RuSt").title, "rust");
        assert_eq!(Tag::new("async").title, "async");
    }
}
