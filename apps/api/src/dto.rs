use serde::Serialize;

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body returned when an access check is granted. The identifiers are opaque
/// integers callers use for tenant-scoped filtering.
#[derive(Debug, Serialize)]
pub struct AccessGrantedResponse {
    pub company_id: i64,
    pub membership_id: i64,
}
