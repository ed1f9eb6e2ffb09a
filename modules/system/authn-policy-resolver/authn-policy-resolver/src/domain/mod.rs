//! Domain layer for the `AuthN` policy resolver.

pub mod criteria;
pub mod error;
pub mod local_client;
pub mod service;

pub use criteria::build_policies;
pub use error::DomainError;
pub use local_client::AuthnPolicyResolverLocalClient;
pub use service::Service;
