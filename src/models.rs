//! Entity Models
//!
//! Data structures matching the JSONPlaceholder API shapes. Records created
//! locally carry negative ids to keep them apart from remote ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

impl User {
    pub fn is_local(&self) -> bool {
        self.id < 0
    }

    /// Case-insensitive substring match over name or email.
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.email, query)
    }
}

impl Post {
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(&self.title, query) || contains_ci(&self.body, query)
    }

    /// Preview of the post body, truncated to `max_chars` characters.
    pub fn body_preview(&self, max_chars: usize) -> String {
        if self.body.chars().count() <= max_chars {
            self.body.clone()
        } else {
            let mut preview: String = self.body.chars().take(max_chars).collect();
            preview.push_str("...");
            preview
        }
    }
}

impl Comment {
    pub fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.body, query)
    }
}

impl Todo {
    pub fn is_local(&self) -> bool {
        self.id < 0
    }

    pub fn matches(&self, query: &str) -> bool {
        contains_ci(&self.title, query)
    }
}

/// Case-insensitive substring check; the empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: i64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_user_matches_name_or_email() {
        let user = make_user(1, "Leanne Graham", "Sincere@april.biz");

        assert!(user.matches("leanne"));
        assert!(user.matches("APRIL"));
        assert!(user.matches(""));
        assert!(!user.matches("nothing here"));
    }

    #[test]
    fn test_user_matches_is_idempotent() {
        let users = vec![
            make_user(1, "Leanne Graham", "Sincere@april.biz"),
            make_user(2, "Ervin Howell", "Shanna@melissa.tv"),
        ];

        let once: Vec<_> = users.iter().filter(|u| u.matches("an")).cloned().collect();
        let twice: Vec<_> = once.iter().filter(|u| u.matches("an")).cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_todo_matches_title_only() {
        let todo = Todo {
            id: 1,
            user_id: 3,
            title: "Buy groceries".to_string(),
            completed: false,
        };

        assert!(todo.matches("GROC"));
        assert!(!todo.matches("3"));
    }

    #[test]
    fn test_post_body_preview_truncates() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "t".to_string(),
            body: "x".repeat(150),
        };

        assert_eq!(post.body_preview(100).chars().count(), 103);
        assert!(post.body_preview(100).ends_with("..."));

        let short = Post {
            body: "short".to_string(),
            ..post
        };
        assert_eq!(short.body_preview(100), "short");
    }

    #[test]
    fn test_local_flag_tracks_sign() {
        assert!(make_user(-5, "a", "b").is_local());
        assert!(!make_user(5, "a", "b").is_local());
    }

    #[test]
    fn test_wire_field_names() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"userId":3,"title":"A","completed":false}"#).unwrap();
        assert_eq!(todo.user_id, 3);

        let comment: Comment = serde_json::from_str(
            r#"{"id":7,"postId":2,"name":"n","email":"e@x.y","body":"b"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 2);
    }
}
