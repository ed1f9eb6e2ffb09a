//! Errors raised while building the static service registry.

use thiserror::Error;

/// Invalid registry configuration.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid service_id pattern for registered service {id}: {reason}")]
    InvalidPattern { id: i64, reason: String },

    #[error("duplicate registered service id {0}")]
    DuplicateId(i64),
}
