//! Domain models for the `AuthN` policy resolver module.

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::criteria::PolicyCriteria;

/// Reference to the application a principal is authenticating to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier, typically the service URL.
    pub id: String,
    /// The URL as originally presented, before any normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

impl Service {
    /// Create a service reference whose original URL is its identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            original_url: Some(id.clone()),
            id,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A credential supplied with an authentication attempt.
///
/// Secret material is wrapped in `SecretString` so `Debug` redacts it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credential {
    /// Username and password pair.
    UsernamePassword {
        username: String,
        password: SecretString,
    },
    /// Opaque token (one-time password, API token, ...).
    Token { token: SecretString },
}

impl Credential {
    /// Create a username/password credential.
    #[must_use]
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UsernamePassword {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Create an opaque token credential.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: SecretString::from(token.into()),
        }
    }

    /// Identifier of the credential, safe to log.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::UsernamePassword { username, .. } => username,
            Self::Token { .. } => "token",
        }
    }
}

/// An inbound request to authenticate a principal.
///
/// Created by the caller and read-only for the duration of resolution.
#[derive(Debug, Clone)]
pub struct AuthenticationTransaction {
    service: Option<Service>,
    credentials: Vec<Credential>,
}

impl AuthenticationTransaction {
    #[must_use]
    pub fn new(service: Option<Service>, credentials: Vec<Credential>) -> Self {
        Self {
            service,
            credentials,
        }
    }

    /// Convenience constructor accepting any credential iterator.
    #[must_use]
    pub fn of(service: Option<Service>, credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self::new(service, credentials.into_iter().collect())
    }

    /// The raw service reference, if a service participates.
    #[must_use]
    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    #[must_use]
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }
}

/// Access rules attached to a registered service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessStrategy {
    /// Whether the service may be used at all.
    pub enabled: bool,
    /// Whether the service may reuse an existing single sign-on session.
    pub sso_enabled: bool,
}

impl Default for AccessStrategy {
    fn default() -> Self {
        Self {
            enabled: true,
            sso_enabled: true,
        }
    }
}

impl AccessStrategy {
    /// Strategy that rejects SSO participation.
    #[must_use]
    pub fn sso_disabled() -> Self {
        Self {
            enabled: true,
            sso_enabled: false,
        }
    }

    #[must_use]
    pub fn is_sso_allowed(&self) -> bool {
        self.enabled && self.sso_enabled
    }
}

/// Authentication policy configuration attached to a registered service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthenticationPolicyConfig {
    /// Criteria selecting the obligation. Absent means `DEFAULT`.
    pub criteria: Option<PolicyCriteria>,
}

impl AuthenticationPolicyConfig {
    #[must_use]
    pub fn with_criteria(criteria: PolicyCriteria) -> Self {
        Self {
            criteria: Some(criteria),
        }
    }
}

/// A service definition as stored by the service directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisteredService {
    /// Numeric identifier, unique within a directory.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Regular expression matched against canonical service identifiers.
    pub service_id: String,
    /// Lower values are matched first.
    #[serde(default)]
    pub evaluation_order: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub access_strategy: AccessStrategy,
    #[serde(default)]
    pub authentication_policy: Option<AuthenticationPolicyConfig>,
}

impl RegisteredService {
    /// Create a definition with default access and no authentication policy.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, service_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            service_id: service_id.into(),
            evaluation_order: 0,
            description: None,
            access_strategy: AccessStrategy::default(),
            authentication_policy: None,
        }
    }

    #[must_use]
    pub fn with_access_strategy(mut self, access_strategy: AccessStrategy) -> Self {
        self.access_strategy = access_strategy;
        self
    }

    #[must_use]
    pub fn with_authentication_policy(mut self, policy: AuthenticationPolicyConfig) -> Self {
        self.authentication_policy = Some(policy);
        self
    }

    #[must_use]
    pub fn with_evaluation_order(mut self, evaluation_order: i32) -> Self {
        self.evaluation_order = evaluation_order;
        self
    }

    /// Criteria configured for this service, if any.
    #[must_use]
    pub fn criteria(&self) -> Option<&PolicyCriteria> {
        self.authentication_policy
            .as_ref()
            .and_then(|p| p.criteria.as_ref())
    }
}
