use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use keyscope_core::AppError;
use serde::Serialize;
use tracing::error;

/// API error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
}

/// HTTP wrapper translating denials and core errors into responses.
///
/// Relation store failures map to 500, never 403, so an infrastructure fault
/// is never read as an authorization decision.
#[derive(Debug)]
pub enum ApiError {
    /// Uniform denial carrying no further detail.
    Denied,
    /// Failure from the core taxonomy.
    App(AppError),
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Denied => (StatusCode::FORBIDDEN, "access denied".to_owned()),
            Self::App(AppError::Validation(message)) => (StatusCode::BAD_REQUEST, message),
            Self::App(AppError::AmbiguousScope(message)) => (StatusCode::BAD_REQUEST, message),
            Self::App(failure @ (AppError::RelationStore(_) | AppError::Internal(_))) => {
                error!(%failure, "authorization check failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use keyscope_core::AppError;

    use super::ApiError;

    #[test]
    fn denial_maps_to_forbidden() {
        let response = ApiError::Denied.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn ambiguous_scope_maps_to_bad_request() {
        let response =
            ApiError::App(AppError::AmbiguousScope("two companies".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn relation_store_failure_maps_to_internal_error() {
        let response =
            ApiError::App(AppError::RelationStore("connection reset".to_owned()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
