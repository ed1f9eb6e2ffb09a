//! Authentication policy criteria attached to registered services.
//!
//! Criteria are declarative: they name the obligation a service requires,
//! and the resolver turns them into [`AuthenticationPolicy`] objects.
//!
//! [`AuthenticationPolicy`]: crate::policy::AuthenticationPolicy

use secrecy::SecretString;
use serde::Deserialize;

/// Which authentication obligation applies to a service.
///
/// Serialized with a `type` tag, e.g.:
///
/// ```json
/// { "type": "REMOTE_CALL", "url": "https://example.org", "basic_auth_username": "u" }
/// ```
///
/// Unknown tags deserialize to [`PolicyCriteria::Unrecognized`] and are
/// treated like `DEFAULT`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyCriteria {
    /// At least one credential must be validated by some handler.
    AnyHandler {
        /// Keep trying the remaining handlers after one succeeds.
        #[serde(default)]
        try_all: bool,
    },
    /// Every handler that was attempted must have succeeded.
    AllHandlers,
    /// No handler may have reported a prevented authentication.
    NotPrevented,
    /// Obligation decided by a script.
    Scripted {
        /// Script reference or inline body.
        script: String,
    },
    /// Obligation decided by a remote endpoint.
    RemoteCall {
        url: String,
        #[serde(default)]
        basic_auth_username: Option<String>,
        #[serde(default)]
        basic_auth_password: Option<SecretString>,
    },
    /// No explicit obligation.
    #[default]
    Default,
    /// Any tag this build does not know about.
    #[serde(other)]
    Unrecognized,
}

impl PolicyCriteria {
    /// Whether these criteria can produce an obligation.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Default | Self::Unrecognized)
    }

    /// Stable name of the criteria type, for logs.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AnyHandler { .. } => "ANY_HANDLER",
            Self::AllHandlers => "ALL_HANDLERS",
            Self::NotPrevented => "NOT_PREVENTED",
            Self::Scripted { .. } => "SCRIPTED",
            Self::RemoteCall { .. } => "REMOTE_CALL",
            Self::Default => "DEFAULT",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
