//! HTTP rendering of request failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use todo_core::QueryError;

/// A request the API could not answer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    /// 404 for a missing record, 400 for malformed parameters.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Query(QueryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Query(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub title: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        let body = ErrorBody {
            status: status.as_u16(),
            title: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
