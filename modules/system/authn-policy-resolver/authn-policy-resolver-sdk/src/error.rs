//! Error types for the `AuthN` policy resolver module.

use thiserror::Error;

/// Errors that can occur when using the `AuthN` policy resolver API.
///
/// Absent configuration (no service, no criteria, `DEFAULT` criteria) is
/// not an error; it is reported as "not applicable" or an empty policy set.
#[derive(Debug, Error)]
pub enum AuthnPolicyResolverError {
    /// The service is not registered or is not allowed to use SSO.
    #[error("service '{service}' is not authorized to use SSO")]
    UnauthorizedService { service: String },

    /// A collaborator is not available.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
