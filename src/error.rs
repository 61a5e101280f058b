use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Failures reading content / 读取内容失败
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("cached value could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Store failures surface as a bare 500, no structured body
impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
