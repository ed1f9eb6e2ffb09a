//! Configuration for the `AuthN` policy resolver.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthnPolicyResolverConfig {
    /// Evaluation-order priority within a resolver pipeline.
    ///
    /// Not enforced by this module; the pipeline sorts resolvers by it.
    pub order: i32,
}
