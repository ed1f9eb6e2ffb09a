#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! `AuthN` Policy Resolver SDK
//!
//! This crate provides the public API for the `authn_policy_resolver` module:
//!
//! - [`AuthenticationPolicyResolverClient`] - Public API trait for the authentication engine
//! - [`ServiceSelector`], [`ServiceDirectory`] - Collaborator traits implemented by plugins
//! - [`AuthenticationTransaction`], [`RegisteredService`] - Input models
//! - [`PolicyCriteria`] - Declarative, service-attached policy criteria
//! - [`AuthenticationPolicy`], [`ResolvedPolicySet`] - Resolved obligations
//! - [`AuthnPolicyResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_policy_resolver_sdk::{AuthenticationPolicyResolverClient, AuthenticationTransaction};
//!
//! let transaction = AuthenticationTransaction::of(Some(service), credentials);
//!
//! // `supports` fails closed when the service is unknown or denies SSO
//! if resolver.supports(&transaction).await? {
//!     let policies = resolver.resolve(&transaction).await?;
//!     for policy in &policies {
//!         engine.require(policy);
//!     }
//! }
//! ```

pub mod api;
pub mod criteria;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod policy;

// Re-export main types at crate root
pub use api::AuthenticationPolicyResolverClient;
pub use criteria::PolicyCriteria;
pub use error::AuthnPolicyResolverError;
pub use models::{
    AccessStrategy, AuthenticationPolicyConfig, AuthenticationTransaction, Credential,
    RegisteredService, Service,
};
pub use plugin_api::{ServiceDirectory, ServiceSelector};
pub use policy::{
    AllHandlersSucceededPolicy, AtLeastOneCredentialValidatedPolicy, AuthenticationPolicy,
    NotPreventedPolicy, RemoteCallPolicy, ResolvedPolicySet, ScriptedPolicy,
};
