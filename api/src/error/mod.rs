use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;
use crate::queue::QueueError;
use crate::services::asset_loader::AssetLoaderError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, err_msg) = match self {
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": err_msg
        }));

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<AssetLoaderError> for ApiError {
    fn from(err: AssetLoaderError) -> Self {
        match err {
            AssetLoaderError::TransactionNotFound(_) | AssetLoaderError::AssetNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            AssetLoaderError::InvalidValue(_) => ApiError::InvalidRequest(err.to_string()),
            AssetLoaderError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: ApiError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn maps_variants_to_status_codes() {
        let (status, body) = body_of(ApiError::NotFound("asset abc".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"asset abc"}"#);

        let (status, _) = body_of(ApiError::InvalidRequest("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = body_of(ApiError::DatabaseError("down".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn loader_not_found_errors_become_not_found() {
        let err: ApiError = AssetLoaderError::AssetNotFound("abc".into()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError =
            AssetLoaderError::Database(DbError::QueryError("boom".into())).into();
        assert!(matches!(err, ApiError::DatabaseError(_)));
    }
}
