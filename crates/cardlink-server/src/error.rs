use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cardlink_core::CardlinkError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<CardlinkError>() {
            match e {
                CardlinkError::CardNotFound(_) | CardlinkError::ActionNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                CardlinkError::InvalidCardId(_) | CardlinkError::InvalidVisitTarget(_) => {
                    StatusCode::BAD_REQUEST
                }
                CardlinkError::CardExists(_) => StatusCode::CONFLICT,
                CardlinkError::Io(_) | CardlinkError::Yaml(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
