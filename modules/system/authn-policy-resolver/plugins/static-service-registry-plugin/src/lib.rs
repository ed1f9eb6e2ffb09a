#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Service Registry Plugin
//!
//! This plugin provides the collaborators of the `AuthN` policy resolver from
//! configuration, for development, testing and single-node deployments:
//!
//! - an in-memory [`ServiceDirectory`](authn_policy_resolver_sdk::ServiceDirectory)
//!   matching canonical service ids against each registered service's pattern
//! - a [`ServiceSelector`](authn_policy_resolver_sdk::ServiceSelector) built from
//!   an ordered plan of selection strategies
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_service_registry_plugin:
//!     config:
//!       selection:
//!         strip_query: true
//!       services:
//!         - id: 1
//!           name: "portal"
//!           service_id: "https://portal\\.example\\.org/.*"
//!           evaluation_order: 10
//!           access_strategy:
//!             sso_enabled: true
//!           authentication_policy:
//!             criteria:
//!               type: ANY_HANDLER
//!               try_all: true
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticServiceRegistryPlugin;
