//! Domain service for the `AuthN` policy resolver.

use std::sync::Arc;

use authn_policy_resolver_sdk::{
    AuthenticationTransaction, PolicyCriteria, RegisteredService, ResolvedPolicySet,
    Service as ServiceRef, ServiceDirectory, ServiceSelector,
};
use tracing::{debug, trace, warn};

use super::criteria::build_policies;
use super::error::DomainError;

/// Resolves authentication policies from the criteria of registered services.
///
/// Holds no per-call state; a single instance serves concurrent transactions
/// as long as its collaborators do.
pub struct Service {
    selector: Arc<dyn ServiceSelector>,
    directory: Arc<dyn ServiceDirectory>,
    order: i32,
}

impl Service {
    #[must_use]
    pub fn new(
        selector: Arc<dyn ServiceSelector>,
        directory: Arc<dyn ServiceDirectory>,
        order: i32,
    ) -> Self {
        Self {
            selector,
            directory,
            order,
        }
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    async fn select(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<Option<ServiceRef>, DomainError> {
        self.selector
            .select_service(transaction.service())
            .await
            .map_err(|e| DomainError::SelectionFailed(e.to_string()))
    }

    async fn find(&self, service: &ServiceRef) -> Result<Option<RegisteredService>, DomainError> {
        let registered = self.directory.find_service(service).await?;
        trace!(
            registered_service_id = registered.as_ref().map(|r| r.id),
            "Located registered service definition for this authentication transaction"
        );
        Ok(registered)
    }

    /// Decide whether this resolver contributes an obligation.
    ///
    /// Missing, `DEFAULT` and unrecognized criteria are not applicable.
    ///
    /// Fails closed: an unknown service, or one whose access strategy denies
    /// SSO, aborts the transaction instead of falling through.
    ///
    /// # Errors
    ///
    /// - `UnauthorizedService` if the service is not registered or denies SSO
    /// - Collaborator errors are propagated
    #[tracing::instrument(skip_all, fields(service))]
    pub async fn supports(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<bool, DomainError> {
        let Some(service) = self.select(transaction).await? else {
            debug!("No service participates in this transaction");
            return Ok(false);
        };
        tracing::Span::current().record("service", service.id.as_str());

        let registered = match self.find(&service).await? {
            Some(registered) if registered.access_strategy.is_sso_allowed() => registered,
            _ => {
                warn!(service = %service, "Service is not allowed to use SSO");
                return Err(DomainError::UnauthorizedService {
                    service: service.id,
                });
            }
        };

        Ok(registered.criteria().is_some_and(PolicyCriteria::is_actionable))
    }

    /// Resolve the obligations required for this transaction.
    ///
    /// Access is not checked here; [`supports`](Self::supports) owns that.
    /// Missing services and missing or `DEFAULT` criteria yield an empty set.
    ///
    /// # Errors
    ///
    /// - Collaborator errors are propagated
    #[tracing::instrument(skip_all, fields(service))]
    pub async fn resolve(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<ResolvedPolicySet, DomainError> {
        let Some(service) = self.select(transaction).await? else {
            debug!("No service participates in this transaction");
            return Ok(ResolvedPolicySet::new());
        };
        tracing::Span::current().record("service", service.id.as_str());

        let Some(registered) = self.find(&service).await? else {
            debug!("No registered service found; no policies apply");
            return Ok(ResolvedPolicySet::new());
        };

        let policies = registered
            .criteria()
            .map_or_else(ResolvedPolicySet::new, |criteria| {
                if !criteria.is_actionable() {
                    debug!(
                        criteria_type = criteria.type_name(),
                        "Criteria contribute no obligation"
                    );
                }
                build_policies(criteria)
            });

        debug!(
            policies = ?policies.kinds(),
            "Authentication policies for this transaction"
        );
        Ok(policies)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use authn_policy_resolver_sdk::{
        AccessStrategy, AuthenticationPolicyConfig, AuthnPolicyResolverError, Credential,
    };

    use super::*;

    struct IdentitySelector;

    #[async_trait]
    impl ServiceSelector for IdentitySelector {
        async fn select_service(
            &self,
            service: Option<&ServiceRef>,
        ) -> Result<Option<ServiceRef>, AuthnPolicyResolverError> {
            Ok(service.cloned())
        }
    }

    #[derive(Default)]
    struct MapDirectory {
        services: HashMap<String, RegisteredService>,
        lookups: AtomicUsize,
    }

    impl MapDirectory {
        fn with(mut self, svc: RegisteredService) -> Self {
            self.services.insert(svc.service_id.clone(), svc);
            self
        }
    }

    #[async_trait]
    impl ServiceDirectory for MapDirectory {
        async fn find_service(
            &self,
            service: &ServiceRef,
        ) -> Result<Option<RegisteredService>, AuthnPolicyResolverError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.services.get(&service.id).cloned())
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl ServiceDirectory for FailingDirectory {
        async fn find_service(
            &self,
            _service: &ServiceRef,
        ) -> Result<Option<RegisteredService>, AuthnPolicyResolverError> {
            Err(AuthnPolicyResolverError::ServiceUnavailable(
                "registry offline".to_owned(),
            ))
        }
    }

    fn service_with(id: &str, criteria: Option<PolicyCriteria>) -> RegisteredService {
        let svc = RegisteredService::new(1, id, id);
        match criteria {
            Some(c) => svc.with_authentication_policy(AuthenticationPolicyConfig::with_criteria(c)),
            None => svc,
        }
    }

    fn transaction(service: Option<&str>) -> AuthenticationTransaction {
        AuthenticationTransaction::of(
            service.map(ServiceRef::new),
            [Credential::username_password("casuser", "casuser")],
        )
    }

    fn resolver(directory: Arc<dyn ServiceDirectory>) -> Service {
        Service::new(Arc::new(IdentitySelector), directory, 0)
    }

    #[tokio::test]
    async fn supports_is_false_without_service() {
        let directory = Arc::new(MapDirectory::default());
        let svc = resolver(directory.clone());

        assert!(!svc.supports(&transaction(None)).await.unwrap());
        assert_eq!(directory.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn supports_fails_closed_for_unknown_service() {
        let svc = resolver(Arc::new(MapDirectory::default()));

        match svc.supports(&transaction(Some("unknown"))).await {
            Err(DomainError::UnauthorizedService { service }) => assert_eq!(service, "unknown"),
            other => panic!("Expected UnauthorizedService, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn supports_fails_closed_when_sso_denied() {
        let denied = service_with("denied", Some(PolicyCriteria::NotPrevented))
            .with_access_strategy(AccessStrategy::sso_disabled());
        let svc = resolver(Arc::new(MapDirectory::default().with(denied)));

        assert!(matches!(
            svc.supports(&transaction(Some("denied"))).await,
            Err(DomainError::UnauthorizedService { .. })
        ));
    }

    #[tokio::test]
    async fn supports_is_false_for_missing_or_default_criteria() {
        let directory = MapDirectory::default()
            .with(service_with("none", None))
            .with(service_with("default", Some(PolicyCriteria::Default)));
        let svc = resolver(Arc::new(directory));

        assert!(!svc.supports(&transaction(Some("none"))).await.unwrap());
        assert!(!svc.supports(&transaction(Some("default"))).await.unwrap());
    }

    #[tokio::test]
    async fn supports_is_true_for_explicit_criteria() {
        let directory =
            MapDirectory::default().with(service_with("all", Some(PolicyCriteria::AllHandlers)));
        let svc = resolver(Arc::new(directory));

        assert!(svc.supports(&transaction(Some("all"))).await.unwrap());
    }

    #[tokio::test]
    async fn resolve_does_not_enforce_access() {
        let denied = service_with("denied", Some(PolicyCriteria::NotPrevented))
            .with_access_strategy(AccessStrategy::sso_disabled());
        let svc = resolver(Arc::new(MapDirectory::default().with(denied)));

        let policies = svc.resolve(&transaction(Some("denied"))).await.unwrap();
        assert_eq!(policies.kinds(), vec!["not_prevented"]);
    }

    #[tokio::test]
    async fn resolve_is_empty_for_unknown_or_absent_service() {
        let svc = resolver(Arc::new(MapDirectory::default()));

        assert!(svc.resolve(&transaction(Some("unknown"))).await.unwrap().is_empty());
        assert!(svc.resolve(&transaction(None)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unrecognized_criteria_behave_like_default() {
        let directory = MapDirectory::default()
            .with(service_with("future", Some(PolicyCriteria::Unrecognized)));
        let svc = resolver(Arc::new(directory));
        let tx = transaction(Some("future"));

        assert!(!svc.supports(&tx).await.unwrap());
        assert!(svc.resolve(&tx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn directory_errors_propagate() {
        let svc = resolver(Arc::new(FailingDirectory));

        assert!(matches!(
            svc.supports(&transaction(Some("any"))).await,
            Err(DomainError::DirectoryUnavailable(_))
        ));
        assert!(matches!(
            svc.resolve(&transaction(Some("any"))).await,
            Err(DomainError::DirectoryUnavailable(_))
        ));
    }
}
