//! Collaborator trait implementations for the static service registry plugin.

use async_trait::async_trait;
use authn_policy_resolver_sdk::{
    AuthnPolicyResolverError, RegisteredService, Service, ServiceDirectory, ServiceSelector,
};

use super::registry::InMemoryServiceRegistry;
use super::selection::ServiceSelectionPlan;

#[async_trait]
impl ServiceDirectory for InMemoryServiceRegistry {
    async fn find_service(
        &self,
        service: &Service,
    ) -> Result<Option<RegisteredService>, AuthnPolicyResolverError> {
        Ok(self.find(service).cloned())
    }
}

#[async_trait]
impl ServiceSelector for ServiceSelectionPlan {
    async fn select_service(
        &self,
        service: Option<&Service>,
    ) -> Result<Option<Service>, AuthnPolicyResolverError> {
        Ok(self.resolve(service))
    }
}
