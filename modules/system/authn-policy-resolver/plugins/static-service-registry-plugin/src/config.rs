//! Configuration for the static service registry plugin.

use authn_policy_resolver_sdk::RegisteredService;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticServiceRegistryPluginConfig {
    /// Registered service definitions.
    pub services: Vec<RegisteredService>,

    /// Service selection settings.
    pub selection: SelectionConfig,
}

/// Service selection settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Drop query string and fragment from service ids before lookup.
    pub strip_query: bool,
}
