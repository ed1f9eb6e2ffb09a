//! Local (in-process) client for the `AuthN` policy resolver.

use std::sync::Arc;

use async_trait::async_trait;
use authn_policy_resolver_sdk::{
    AuthenticationPolicyResolverClient, AuthenticationTransaction, AuthnPolicyResolverError,
    ResolvedPolicySet,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Returned by the module during `init()`.
pub struct AuthnPolicyResolverLocalClient {
    svc: Arc<Service>,
}

impl AuthnPolicyResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthnPolicyResolverError {
    tracing::error!(operation = op, error = ?e, "authn_policy_resolver call failed");
    e.into()
}

#[async_trait]
impl AuthenticationPolicyResolverClient for AuthnPolicyResolverLocalClient {
    async fn supports(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<bool, AuthnPolicyResolverError> {
        self.svc
            .supports(transaction)
            .await
            .map_err(|e| log_and_convert("supports", e))
    }

    async fn resolve(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<ResolvedPolicySet, AuthnPolicyResolverError> {
        self.svc
            .resolve(transaction)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }

    fn order(&self) -> i32 {
        self.svc.order()
    }
}
