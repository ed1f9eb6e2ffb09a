//! Collaborator traits consumed by the `AuthN` policy resolver.
//!
//! Plugins implement these to normalize inbound service references and to
//! look up registered service definitions. Both are treated as read-only
//! capabilities that are safe to call from concurrent transactions.

use async_trait::async_trait;

use crate::error::AuthnPolicyResolverError;
use crate::models::{RegisteredService, Service};

/// Normalizes the service reference carried by a transaction.
#[async_trait]
pub trait ServiceSelector: Send + Sync {
    /// Produce the canonical service used for directory lookups.
    ///
    /// Returns `Ok(None)` when no service participates in the transaction.
    ///
    /// # Errors
    ///
    /// - `Internal` for unexpected errors
    async fn select_service(
        &self,
        service: Option<&Service>,
    ) -> Result<Option<Service>, AuthnPolicyResolverError>;
}

/// Resolves a canonical service to its registered definition.
#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    /// Find the registered service matching `service`.
    ///
    /// Returns `Ok(None)` when the service is not registered.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn find_service(
        &self,
        service: &Service,
    ) -> Result<Option<RegisteredService>, AuthnPolicyResolverError>;
}
