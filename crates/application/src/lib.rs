//! Authorization use-case and the port it consumes.

#![forbid(unsafe_code)]

mod authorization_service;
mod relation_store;

pub use authorization_service::AuthorizationService;
pub use relation_store::RelationStore;
