use keyscope_core::{AppError, AppResult, CompanyId};
use keyscope_domain::{Membership, ScopeContext};

use super::AuthorizationService;

impl AuthorizationService {
    /// Resolves the single active scope a credential acts within.
    ///
    /// Missing credential, no active membership, an inactive company and a
    /// target company the credential has no membership in all resolve to
    /// `None`, which the caller folds into a denial. A credential spanning
    /// several companies must be disambiguated by the caller; a scope is
    /// never guessed.
    pub(super) async fn resolve_scope(
        &self,
        credential: &str,
        target_company: Option<CompanyId>,
    ) -> AppResult<Option<ScopeContext>> {
        let memberships = self
            .relation_store
            .memberships_for_credential(credential)
            .await?;

        let mut active: Vec<Membership> = memberships
            .into_iter()
            .filter(|membership| membership.status.is_active())
            .collect();

        let selected = match target_company {
            Some(company_id) => {
                match active
                    .iter()
                    .position(|membership| membership.company_id == company_id)
                {
                    Some(index) => active.swap_remove(index),
                    None => return Ok(None),
                }
            }
            None => {
                let mut companies: Vec<CompanyId> = active
                    .iter()
                    .map(|membership| membership.company_id)
                    .collect();
                companies.sort_unstable();
                companies.dedup();

                if companies.len() > 1 {
                    return Err(AppError::AmbiguousScope(
                        "credential holds active memberships in more than one company; \
                         a target company is required"
                            .to_owned(),
                    ));
                }

                match active.pop() {
                    Some(membership) => membership,
                    None => return Ok(None),
                }
            }
        };

        let company = self
            .relation_store
            .company_for_membership(&selected)
            .await?;

        match company {
            Some(company) if company.status.is_active() => Ok(Some(ScopeContext {
                company_id: selected.company_id,
                membership_id: selected.id,
            })),
            _ => Ok(None),
        }
    }
}
