use std::sync::Arc;

use keyscope_core::{AppResult, CompanyId};
use keyscope_domain::Decision;

use crate::RelationStore;

mod scope;

/// Application service producing tenant-scoped authorization decisions.
///
/// Each call is an independent, idempotent read; decisions are never cached
/// because the underlying role data can change between requests.
#[derive(Clone)]
pub struct AuthorizationService {
    relation_store: Arc<dyn RelationStore>,
}

impl AuthorizationService {
    /// Creates a service from a relation store implementation.
    #[must_use]
    pub fn new(relation_store: Arc<dyn RelationStore>) -> Self {
        Self { relation_store }
    }

    /// Decides whether a credential may perform an action on a resource.
    ///
    /// `target_company` selects the company scope to evaluate in and is
    /// required when the credential holds active memberships in more than one
    /// company. Blank input is folded into [`Decision::Denied`] before any
    /// storage access. Storage failures surface as errors so the caller can
    /// tell an infrastructure fault apart from a denial.
    pub async fn authorize(
        &self,
        credential: &str,
        resource_name: &str,
        action_name: &str,
        target_company: Option<CompanyId>,
    ) -> AppResult<Decision> {
        if credential.trim().is_empty()
            || resource_name.trim().is_empty()
            || action_name.trim().is_empty()
        {
            return Ok(Decision::Denied);
        }

        let Some(scope) = self.resolve_scope(credential, target_company).await? else {
            return Ok(Decision::Denied);
        };

        let pairs = self
            .relation_store
            .effective_permission_pairs(credential, scope.company_id)
            .await?;

        if pairs.grants(resource_name, action_name) {
            Ok(Decision::Granted(scope))
        } else {
            Ok(Decision::Denied)
        }
    }
}
