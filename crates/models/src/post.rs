use serde::{Deserialize, Serialize};

/// A stored blog post. `id` is unique and never reassigned to a live post;
/// `title` and `content` are never empty once stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// Create-request body. Both fields are required; they are optional here so
/// a partial body decodes and validation can report every missing field at
/// once instead of failing on the first.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewPost {
    /// Names of required fields that are absent or blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !has_text(&self.title) {
            missing.push("title");
        }
        if !has_text(&self.content) {
            missing.push("content");
        }
        missing
    }
}

/// Update-request body. Absent and `null` fields keep the stored value;
/// blank values are ignored so a stored post never becomes empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
