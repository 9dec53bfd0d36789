use keyscope_core::{AppError, AppResult, CompanyId, MembershipId};
use serde::{Deserialize, Serialize};

/// Activity status carried by memberships and companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Record participates in authorization.
    Active,
    /// Record is retained but never produces a grant.
    Inactive,
}

impl ActivityStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parses a storage value into a status.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(AppError::Validation(format!(
                "unknown activity status '{other}'"
            ))),
        }
    }

    /// Returns whether this status permits authorization.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A person's association with a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Stable membership identifier.
    pub id: MembershipId,
    /// Person holding the membership.
    pub person_id: i64,
    /// Company the membership belongs to.
    pub company_id: CompanyId,
    /// Whether the membership currently participates in authorization.
    pub status: ActivityStatus,
    /// Optional job title within the company.
    pub job_title: Option<String>,
    /// Weak "reports to" reference consumed by hierarchy read-paths;
    /// never traversed when resolving an authorization decision.
    pub parent_membership_id: Option<MembershipId>,
}

#[cfg(test)]
mod tests {
    use super::ActivityStatus;

    #[test]
    fn status_roundtrip_storage_value() {
        let restored = ActivityStatus::parse(ActivityStatus::Inactive.as_str());
        assert!(restored.is_ok());
        assert_eq!(
            restored.unwrap_or(ActivityStatus::Active),
            ActivityStatus::Inactive
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = ActivityStatus::parse("suspended");
        assert!(parsed.is_err());
    }

    #[test]
    fn only_active_status_authorizes() {
        assert!(ActivityStatus::Active.is_active());
        assert!(!ActivityStatus::Inactive.is_active());
    }
}
