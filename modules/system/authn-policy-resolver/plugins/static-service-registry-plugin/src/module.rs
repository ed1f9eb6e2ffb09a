//! Static service registry plugin module.

use std::sync::Arc;

use authn_policy_resolver_sdk::{PolicyCriteria, ServiceDirectory, ServiceSelector};
use tracing::{debug, info};

use crate::config::StaticServiceRegistryPluginConfig;
use crate::domain::{
    DefaultServiceSelectionStrategy, InMemoryServiceRegistry, QueryStrippingServiceSelectionStrategy,
    RegistryError, ServiceSelectionPlan, ServiceSelectionStrategy,
};

/// Static service registry plugin module.
///
/// Builds the service directory and the service selector from configuration.
/// Both are read-only after construction and shared by reference count.
pub struct StaticServiceRegistryPlugin {
    registry: Arc<InMemoryServiceRegistry>,
    plan: Arc<ServiceSelectionPlan>,
}

impl StaticServiceRegistryPlugin {
    /// Build the plugin from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a registered service has an invalid pattern or a
    /// duplicate id.
    pub fn from_config(cfg: &StaticServiceRegistryPluginConfig) -> Result<Self, RegistryError> {
        info!("Initializing static_service_registry_plugin");

        let registry = InMemoryServiceRegistry::new(cfg.services.iter().cloned())?;
        for service in registry.services() {
            debug!(
                registered_service_id = service.id,
                pattern = %service.service_id,
                evaluation_order = service.evaluation_order,
                criteria = service.criteria().map_or("DEFAULT", PolicyCriteria::type_name),
                "Registered service"
            );
        }

        let mut strategies: Vec<Box<dyn ServiceSelectionStrategy>> =
            vec![Box::new(DefaultServiceSelectionStrategy)];
        if cfg.selection.strip_query {
            strategies.push(Box::new(QueryStrippingServiceSelectionStrategy));
        }

        info!(
            service_count = registry.len(),
            strip_query = cfg.selection.strip_query,
            "Static service registry plugin initialized"
        );

        Ok(Self {
            registry: Arc::new(registry),
            plan: Arc::new(ServiceSelectionPlan::new(strategies)),
        })
    }

    #[must_use]
    pub fn directory(&self) -> Arc<dyn ServiceDirectory> {
        self.registry.clone()
    }

    #[must_use]
    pub fn selector(&self) -> Arc<dyn ServiceSelector> {
        self.plan.clone()
    }
}
