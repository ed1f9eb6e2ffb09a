//! `AuthN` policy resolver module.

use std::sync::{Arc, OnceLock};

use authn_policy_resolver_sdk::{
    AuthenticationPolicyResolverClient, ServiceDirectory, ServiceSelector,
};
use tracing::info;

use crate::config::AuthnPolicyResolverConfig;
use crate::domain::{AuthnPolicyResolverLocalClient, Service};

/// `AuthN` policy resolver module.
///
/// This module:
/// 1. Wires the injected service selector and service directory into the domain service
/// 2. Exposes the service as an `AuthenticationPolicyResolverClient`
///
/// The selector and directory are shared, read-only collaborators.
#[derive(Default)]
pub struct AuthnPolicyResolverModule {
    service: OnceLock<Arc<Service>>,
}

impl AuthnPolicyResolverModule {
    pub const MODULE_NAME: &'static str = "authn-policy-resolver";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the module and return its client.
    ///
    /// # Errors
    ///
    /// Returns an error if the module was already initialized.
    #[tracing::instrument(skip_all, fields(order = cfg.order))]
    pub fn init(
        &self,
        cfg: &AuthnPolicyResolverConfig,
        selector: Arc<dyn ServiceSelector>,
        directory: Arc<dyn ServiceDirectory>,
    ) -> anyhow::Result<Arc<dyn AuthenticationPolicyResolverClient>> {
        info!(order = cfg.order, "Initializing {} module", Self::MODULE_NAME);

        let svc = Arc::new(Service::new(selector, directory, cfg.order));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("{} module already initialized", Self::MODULE_NAME))?;

        let api: Arc<dyn AuthenticationPolicyResolverClient> =
            Arc::new(AuthnPolicyResolverLocalClient::new(svc));

        info!("{} module initialized successfully", Self::MODULE_NAME);
        Ok(api)
    }

    /// The domain service, once initialized.
    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.service.get().cloned()
    }
}
