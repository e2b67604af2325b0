use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct PostDoc {
    pub id: u64,
    pub title: String,
    pub content: String,
}

#[derive(ToSchema)]
pub struct NewPostDoc {
    pub title: String,
    pub content: String,
}

#[derive(ToSchema)]
pub struct PostPatchDoc {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::posts::list,
        crate::routes::posts::create,
        crate::routes::posts::search,
        crate::routes::posts::update,
        crate::routes::posts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PostDoc,
            NewPostDoc,
            PostPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts")
    )
)]
pub struct ApiDoc;
