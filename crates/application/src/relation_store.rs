use async_trait::async_trait;
use keyscope_core::{AppResult, CompanyId};
use keyscope_domain::{Company, Membership, PermissionSet};

/// Port for read-only access to the credential/role/permission relation
/// graph.
///
/// Implementations surface storage failures as
/// [`AppError::RelationStore`](keyscope_core::AppError::RelationStore)
/// carrying the underlying cause, and never retry internally; retry policy
/// belongs to the caller.
#[async_trait]
pub trait RelationStore: Send + Sync {
    /// Lists every membership reachable from a bearer credential, active or
    /// not.
    async fn memberships_for_credential(
        &self,
        credential: &str,
    ) -> AppResult<Vec<Membership>>;

    /// Resolves the company owning a membership.
    async fn company_for_membership(
        &self,
        membership: &Membership,
    ) -> AppResult<Option<Company>>;

    /// Aggregates the distinct (resource, action) pairs granted to a
    /// credential within one company scope.
    ///
    /// The whole six-hop join runs as one read so a role revoked mid-check
    /// cannot leave a partially aggregated set. The union spans every role
    /// assignment the credential's user holds in the scope and is restricted
    /// to active memberships and active companies.
    async fn effective_permission_pairs(
        &self,
        credential: &str,
        company_id: CompanyId,
    ) -> AppResult<PermissionSet>;
}
