use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
    #[error("no post with id {0} was found")]
    NotFound(u64),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
