//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::{AuthorName, NewPost, Post, PostPatch};

/// Author fields as they appear on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorPayload> for AuthorName {
    fn from(author: AuthorPayload) -> Self {
        Self {
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: AuthorPayload,
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.author.first_name.trim().is_empty() {
            return Err("author.firstName must not be blank");
        }
        if self.author.last_name.trim().is_empty() {
            return Err("author.lastName must not be blank");
        }
        if self.title.trim().is_empty() {
            return Err("title must not be blank");
        }
        if self.content.trim().is_empty() {
            return Err("content must not be blank");
        }
        Ok(())
    }

    pub fn into_new_post(self) -> NewPost {
        NewPost {
            author: self.author.into(),
            title: self.title,
            content: self.content,
        }
    }
}

/// Request to update a post; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title must not be blank");
        }
        if let Some(content) = &self.content
            && content.trim().is_empty()
        {
            return Err("content must not be blank");
        }
        Ok(())
    }

    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            content: self.content,
        }
    }
}

/// Externally-visible projection of a post. Exactly five keys; the
/// structured author is pre-formatted as a single display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: String,
}

/// The one projection for every endpoint that returns a post.
impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.to_string(),
            title: post.title,
            content: post.content,
            created: post.created.to_rfc3339(),
        }
    }
}

/// Response body for the post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(NewPost {
            author: AuthorName {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            title: "Notes from the Lab".to_string(),
            content: "We spent the week chasing a heisenbug.".to_string(),
        })
    }

    #[test]
    fn test_view_formats_author_as_display_string() {
        let view = PostView::from(sample_post());
        assert_eq!(view.author, "Ada Lovelace");
    }

    #[test]
    fn test_view_serializes_exactly_five_keys() {
        let value = serde_json::to_value(PostView::from(sample_post())).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "created", "id", "title"]);
    }

    #[test]
    fn test_create_request_reads_camel_case_author() {
        let body = r#"{"author":{"firstName":"A","lastName":"B"},"title":"T","content":"C"}"#;
        let req: CreatePostRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.author.first_name, "A");
        assert_eq!(req.author.last_name, "B");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_fields() {
        let req = CreatePostRequest {
            author: AuthorPayload {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            },
            title: "   ".to_string(),
            content: "C".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_accepts_partial_bodies() {
        assert!(UpdatePostRequest::default().validate().is_ok());

        let title_only = UpdatePostRequest {
            title: Some("T".to_string()),
            content: None,
        };
        assert!(title_only.validate().is_ok());

        let blank_content = UpdatePostRequest {
            title: None,
            content: Some("".to_string()),
        };
        assert!(blank_content.validate().is_err());
    }
}
