//! Public API trait for the `AuthN` policy resolver.
//!
//! The authentication engine consumes this trait to learn which
//! obligations a transaction must satisfy before it may succeed.

use async_trait::async_trait;

use crate::error::AuthnPolicyResolverError;
use crate::models::AuthenticationTransaction;
use crate::policy::ResolvedPolicySet;

/// Public API trait for the `AuthN` policy resolver.
///
/// Several resolvers may be composed in a pipeline; [`order`](Self::order)
/// is the priority the pipeline sorts them by.
///
/// ```ignore
/// if resolver.supports(&transaction).await? {
///     let policies = resolver.resolve(&transaction).await?;
/// }
/// ```
#[async_trait]
pub trait AuthenticationPolicyResolverClient: Send + Sync {
    /// Decide whether this resolver has an obligation to contribute.
    ///
    /// # Errors
    ///
    /// - `UnauthorizedService` if the selected service is not registered or
    ///   its access strategy denies SSO. Terminal for the transaction.
    /// - `ServiceUnavailable` / `Internal` if a collaborator fails
    async fn supports(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<bool, AuthnPolicyResolverError>;

    /// Resolve the ordered, duplicate-free set of obligations for a transaction.
    ///
    /// Missing services, missing criteria and `DEFAULT` criteria all yield an
    /// empty set.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` / `Internal` if a collaborator fails
    async fn resolve(
        &self,
        transaction: &AuthenticationTransaction,
    ) -> Result<ResolvedPolicySet, AuthnPolicyResolverError>;

    /// Evaluation-order priority of this resolver within a pipeline.
    fn order(&self) -> i32;
}
