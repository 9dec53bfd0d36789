//! Relation-graph entities read by the authorization resolver.

#![forbid(unsafe_code)]

mod access;
mod company;
mod decision;
mod membership;

pub use access::{PermissionPair, PermissionSet};
pub use company::Company;
pub use decision::{Decision, ScopeContext};
pub use membership::{ActivityStatus, Membership};
