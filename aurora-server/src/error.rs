use aurora_narrative::api::{ApiError, GenerateResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

/// Maps a generation outcome failure onto an HTTP response.
///
/// Request problems become 400 with their message. Anything else,
/// including an unparseable body, is logged and reported as a generic 500.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            debug!(error = %self.0, "rejected generation request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "generation request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = GenerateResponse::Error {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
