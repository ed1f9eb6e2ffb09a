//! Domain errors for the `AuthN` policy resolver.

use authn_policy_resolver_sdk::AuthnPolicyResolverError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("service '{service}' is not authorized to use SSO")]
    UnauthorizedService { service: String },

    #[error("service directory is not available: {0}")]
    DirectoryUnavailable(String),

    #[error("service selection failed: {0}")]
    SelectionFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthnPolicyResolverError> for DomainError {
    fn from(e: AuthnPolicyResolverError) -> Self {
        match e {
            AuthnPolicyResolverError::UnauthorizedService { service } => {
                Self::UnauthorizedService { service }
            }
            AuthnPolicyResolverError::ServiceUnavailable(msg) => Self::DirectoryUnavailable(msg),
            AuthnPolicyResolverError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for AuthnPolicyResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnauthorizedService { service } => Self::UnauthorizedService { service },
            DomainError::DirectoryUnavailable(reason) => {
                Self::ServiceUnavailable(format!("service directory: {reason}"))
            }
            DomainError::SelectionFailed(reason) => {
                Self::Internal(format!("service selection failed: {reason}"))
            }
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
