use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use models::post::{NewPost, Post, PostPatch};
use models::query::{ListQuery, SearchQuery};
use service::errors::ServiceError;
use service::store::PostStore;

use crate::errors::ApiError;

/// 列出全部文章，支持 sort/direction 排序参数
#[utoipa::path(get, path = "/api/posts", tag = "posts", params(("sort" = Option<String>, Query, description = "Sort field: title or content"), ("direction" = Option<String>, Query, description = "Sort direction: asc or desc")), responses((status = 200, description = "All posts"), (status = 400, description = "Invalid sort or direction")))]
pub async fn list(
    State(store): State<Arc<PostStore>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let sort = query.sort_order().map_err(ServiceError::from)?;
    Ok(Json(store.list(sort).await))
}

/// 创建文章；title 与 content 均为必填
#[utoipa::path(post, path = "/api/posts", tag = "posts", request_body = crate::openapi::NewPostDoc, responses((status = 201, description = "Created"), (status = 400, description = "Missing required fields")))]
pub async fn create(
    State(store): State<Arc<PostStore>>,
    body: Option<Json<NewPost>>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    // 缺失或非法的请求体按空对象处理，由批量校验统一报告缺失字段
    let input = body.map(|Json(inner)| inner).unwrap_or_default();
    let post = store.create(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// 按 title/content 子串（忽略大小写）检索文章
#[utoipa::path(get, path = "/api/posts/search", tag = "posts", params(("title" = Option<String>, Query, description = "Case-insensitive title substring"), ("content" = Option<String>, Query, description = "Case-insensitive content substring")), responses((status = 200, description = "Matching posts")))]
pub async fn search(
    State(store): State<Arc<PostStore>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Post>> {
    Json(store.search(&query).await)
}

/// 更新指定文章；缺省字段保留原值
#[utoipa::path(put, path = "/api/posts/{id}", tag = "posts", request_body = crate::openapi::PostPatchDoc, params(("id" = u64, Path, description = "Post id")), responses((status = 200, description = "Updated"), (status = 404, description = "Post not found")))]
pub async fn update(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<u64>,
    body: Option<Json<PostPatch>>,
) -> Result<Json<Post>, ApiError> {
    let patch = body.map(|Json(inner)| inner).unwrap_or_default();
    let post = store.update(id, patch).await?;
    Ok(Json(post))
}

/// 删除指定文章
#[utoipa::path(delete, path = "/api/posts/{id}", tag = "posts", params(("id" = u64, Path, description = "Post id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Post not found")))]
pub async fn delete(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    store.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Post with id {id} has been deleted successfully.")
    })))
}
