use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use models::post::{NewPost, Post, PostPatch};
use models::query::{SearchQuery, SortDirection, SortField};

use crate::errors::ServiceError;

/// In-memory post collection.
///
/// Owns the only copy of the data behind a `RwLock`: reads share, writes are
/// exclusive, so concurrent requests cannot interleave a partial mutation.
/// Insertion order is the storage order; sorted reads work on a copy.
#[derive(Clone)]
pub struct PostStore {
    inner: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    /// Store holding the two posts every fresh process starts with.
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self::with_posts(seed_posts()))
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { inner: Arc::new(RwLock::new(posts)) }
    }

    /// List all posts in insertion order, optionally sorted case-insensitively
    /// by the given field. Sorting never reorders the stored collection.
    pub async fn list(&self, sort: Option<(SortField, SortDirection)>) -> Vec<Post> {
        let posts = self.inner.read().await;
        let mut out = posts.clone();
        drop(posts);
        if let Some((field, direction)) = sort {
            out.sort_by_cached_key(|post| field_text(post, field).to_lowercase());
            if direction == SortDirection::Desc {
                out.reverse();
            }
        }
        out
    }

    /// Append a new post with id `max existing id + 1` (1 when empty).
    /// Rejects the input with the full list of missing fields, not just the
    /// first one.
    pub async fn create(&self, input: NewPost) -> Result<Post, ServiceError> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields { missing });
        }
        let mut posts = self.inner.write().await;
        let id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            title: input.title.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
        };
        posts.push(post.clone());
        debug!(id, "post created");
        Ok(post)
    }

    /// Posts matching every supplied criterion as a case-insensitive
    /// substring of the corresponding field. Blank criteria match everything;
    /// an empty result is a valid answer.
    pub async fn search(&self, query: &SearchQuery) -> Vec<Post> {
        let title_needle = criterion(&query.title);
        let content_needle = criterion(&query.content);
        let posts = self.inner.read().await;
        posts
            .iter()
            .filter(|post| {
                field_matches(&post.title, title_needle.as_deref())
                    && field_matches(&post.content, content_needle.as_deref())
            })
            .cloned()
            .collect()
    }

    /// Remove the post with the given id.
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let mut posts = self.inner.write().await;
        match posts.iter().position(|post| post.id == id) {
            Some(index) => {
                posts.remove(index);
                debug!(id, "post deleted");
                Ok(())
            }
            None => Err(ServiceError::NotFound(id)),
        }
    }

    /// Apply a partial update to the post with the given id. Only fields
    /// carrying a non-blank value replace the stored ones; the post keeps its
    /// id and position.
    pub async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, ServiceError> {
        let mut posts = self.inner.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        if let Some(title) = patch.title.filter(|value| !value.trim().is_empty()) {
            post.title = title;
        }
        if let Some(content) = patch.content.filter(|value| !value.trim().is_empty()) {
            post.content = content;
        }
        debug!(id, "post updated");
        Ok(post.clone())
    }
}

fn field_text(post: &Post, field: SortField) -> &str {
    match field {
        SortField::Title => &post.title,
        SortField::Content => &post.content,
    }
}

/// Normalize a search criterion: trimmed, lowercased, blank means unset.
fn criterion(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn field_matches(field: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => field.to_lowercase().contains(needle),
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post { id: 1, title: "First post".into(), content: "This is the first post.".into() },
        Post { id: 2, title: "Second post".into(), content: "This is the second post.".into() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost { title: Some(title.into()), content: Some(content.into()) }
    }

    #[tokio::test]
    async fn create_assigns_next_id_after_current_max() {
        let store = PostStore::seeded();
        let post = store.create(new_post("Third post", "Body.")).await.expect("create");
        assert_eq!(post.id, 3);
        assert_eq!(store.list(None).await.len(), 3);
    }

    #[tokio::test]
    async fn create_starts_from_one_on_empty_collection() {
        let store = PostStore::with_posts(Vec::new());
        let post = store.create(new_post("Only", "Body.")).await.expect("create");
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn create_reuses_id_after_deleting_the_max() {
        let store = PostStore::seeded();
        store.delete(2).await.expect("delete");
        let post = store.create(new_post("Replacement", "Body.")).await.expect("create");
        assert_eq!(post.id, 2);
    }

    #[tokio::test]
    async fn create_collects_every_missing_field() {
        let store = PostStore::seeded();
        let err = store.create(NewPost::default()).await.expect_err("must fail");
        match err {
            ServiceError::MissingFields { missing } => {
                assert_eq!(missing, vec!["title", "content"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        // a failed create never grows the collection
        assert_eq!(store.list(None).await.len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_blank_title_only() {
        let store = PostStore::seeded();
        let input = NewPost { title: Some("  ".into()), content: Some("Body.".into()) };
        let err = store.create(input).await.expect_err("must fail");
        match err {
            ServiceError::MissingFields { missing } => assert_eq!(missing, vec!["title"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn list_sorted_does_not_reorder_storage() {
        let store = PostStore::seeded();
        store.create(new_post("aardvark", "zebra")).await.expect("create");

        let sorted = store.list(Some((SortField::Title, SortDirection::Desc))).await;
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second post", "First post", "aardvark"]);

        // a plain list afterwards still sees insertion order
        let unsorted = store.list(None).await;
        let ids: Vec<u64> = unsorted.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_sorts_case_insensitively() {
        let store = PostStore::with_posts(Vec::new());
        store.create(new_post("banana", "x")).await.expect("create");
        store.create(new_post("Apple", "y")).await.expect("create");
        let sorted = store.list(Some((SortField::Title, SortDirection::Asc))).await;
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana"]);
    }

    #[tokio::test]
    async fn search_without_criteria_returns_all() {
        let store = PostStore::seeded();
        assert_eq!(store.search(&SearchQuery::default()).await.len(), 2);
    }

    #[tokio::test]
    async fn search_matches_substring_ignoring_case() {
        let store = PostStore::seeded();
        let query = SearchQuery { title: Some("first".into()), content: None };
        let hits = store.search(&query).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "First post");
    }

    #[tokio::test]
    async fn search_requires_every_criterion() {
        let store = PostStore::seeded();
        let query = SearchQuery {
            title: Some("first".into()),
            content: Some("second".into()),
        };
        assert!(store.search(&query).await.is_empty());
    }

    #[tokio::test]
    async fn search_treats_blank_criterion_as_unset() {
        let store = PostStore::seeded();
        let query = SearchQuery { title: Some("   ".into()), content: None };
        assert_eq!(store.search(&query).await.len(), 2);
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_collection_unchanged() {
        let store = PostStore::seeded();
        let err = store.delete(99).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::NotFound(99)));
        assert_eq!(store.list(None).await.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_post() {
        let store = PostStore::seeded();
        store.delete(1).await.expect("delete");
        let remaining = store.list(None).await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = PostStore::seeded();
        let err = store.update(42, PostPatch::default()).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::NotFound(42)));
    }

    #[tokio::test]
    async fn update_title_only_keeps_content() {
        let store = PostStore::seeded();
        let patch = PostPatch { title: Some("Renamed".into()), content: None };
        let post = store.update(1, patch).await.expect("update");
        assert_eq!(post.title, "Renamed");
        assert_eq!(post.content, "This is the first post.");
    }

    #[tokio::test]
    async fn update_content_only_keeps_title() {
        let store = PostStore::seeded();
        let patch = PostPatch { title: None, content: Some("Rewritten.".into()) };
        let post = store.update(2, patch).await.expect("update");
        assert_eq!(post.title, "Second post");
        assert_eq!(post.content, "Rewritten.");
    }

    #[tokio::test]
    async fn update_with_empty_patch_changes_nothing() {
        let store = PostStore::seeded();
        let post = store.update(1, PostPatch::default()).await.expect("update");
        assert_eq!(post.title, "First post");
        assert_eq!(post.content, "This is the first post.");
    }

    #[tokio::test]
    async fn update_ignores_blank_values() {
        let store = PostStore::seeded();
        let patch = PostPatch { title: Some("".into()), content: Some("  ".into()) };
        let post = store.update(1, patch).await.expect("update");
        assert_eq!(post.title, "First post");
        assert_eq!(post.content, "This is the first post.");
    }
}
