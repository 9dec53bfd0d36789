use keyscope_core::{CompanyId, MembershipId};
use serde::{Deserialize, Serialize};

/// The (company, membership) pair an authorization decision is evaluated and
/// granted within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeContext {
    /// Company the caller is acting within.
    pub company_id: CompanyId,
    /// Membership that produced the grant.
    pub membership_id: MembershipId,
}

/// Outcome of an authorization check.
///
/// A denial carries no detail: an unknown credential, an inactive membership
/// and a missing grant are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Access is permitted within the attached scope.
    Granted(ScopeContext),
    /// Access is rejected.
    Denied,
}

impl Decision {
    /// Returns whether the decision permits access.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// Returns the granted scope, if any.
    #[must_use]
    pub fn scope(&self) -> Option<ScopeContext> {
        match self {
            Self::Granted(scope) => Some(*scope),
            Self::Denied => None,
        }
    }
}
