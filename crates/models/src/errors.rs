use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid value `{value}` for `{name}`: expected one of {allowed}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        allowed: &'static str,
    },
}
