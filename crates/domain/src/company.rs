use keyscope_core::CompanyId;
use serde::{Deserialize, Serialize};

use crate::membership::ActivityStatus;

/// A tenant company every authorization decision is scoped by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Stable company identifier.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
    /// Whether the company currently participates in authorization.
    pub status: ActivityStatus,
}
