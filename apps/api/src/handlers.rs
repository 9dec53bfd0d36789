use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use keyscope_core::CompanyId;
use keyscope_domain::Decision;
use serde::Deserialize;
use tracing::debug;

use crate::dto::{AccessGrantedResponse, HealthResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for an access check.
#[derive(Debug, Deserialize)]
pub struct CheckAccessParams {
    resource: String,
    action: String,
    company: Option<i64>,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Decides an access request for the bearer key in the `x-api-key` header.
///
/// A missing header is handed to the core as an empty credential and fails
/// closed there.
pub async fn check_access_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CheckAccessParams>,
) -> ApiResult<Json<AccessGrantedResponse>> {
    let credential = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let decision = state
        .authorization_service
        .authorize(
            credential,
            params.resource.as_str(),
            params.action.as_str(),
            params.company.map(CompanyId::from_i64),
        )
        .await?;

    match decision {
        Decision::Granted(scope) => {
            debug!(
                company_id = scope.company_id.as_i64(),
                membership_id = scope.membership_id.as_i64(),
                "access granted"
            );
            Ok(Json(AccessGrantedResponse {
                company_id: scope.company_id.as_i64(),
                membership_id: scope.membership_id.as_i64(),
            }))
        }
        Decision::Denied => Err(ApiError::Denied),
    }
}
