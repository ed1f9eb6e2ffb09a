//! `AuthN` Policy Resolver Module
//!
//! This module decides which authentication policies a transaction must
//! satisfy, based on the policy criteria attached to the target service.
//! Service selection and lookup are delegated to injected
//! [`ServiceSelector`](authn_policy_resolver_sdk::ServiceSelector) and
//! [`ServiceDirectory`](authn_policy_resolver_sdk::ServiceDirectory) implementations.
//!
//! Provides the `AuthenticationPolicyResolverClient` trait implementation
//! consumed by the authentication engine.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::AuthnPolicyResolverConfig;
pub use module::AuthnPolicyResolverModule;
