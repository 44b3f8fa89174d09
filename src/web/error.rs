use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::enrollment::EnrollmentError;

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = match self {
            EnrollmentError::ActivityNotFound | EnrollmentError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            EnrollmentError::AlreadyEnrolled | EnrollmentError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
