//! Authentication policies (obligations) and the resolved policy set.
//!
//! Policies are immutable rule objects handed to the authentication engine.
//! This crate only constructs and carries them; evaluating a policy against
//! handler results is the engine's job.

use secrecy::{ExposeSecret, SecretString};

/// At least one supplied credential must be validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtLeastOneCredentialValidatedPolicy {
    try_all: bool,
}

impl AtLeastOneCredentialValidatedPolicy {
    #[must_use]
    pub fn new(try_all: bool) -> Self {
        Self { try_all }
    }

    /// Whether the engine should keep trying handlers after one succeeds.
    #[must_use]
    pub fn try_all(&self) -> bool {
        self.try_all
    }
}

/// Every attempted handler must have succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllHandlersSucceededPolicy;

/// No handler may have prevented the authentication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotPreventedPolicy;

/// Obligation evaluated by a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPolicy {
    script: String,
}

impl ScriptedPolicy {
    #[must_use]
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }
}

/// Obligation evaluated by a remote endpoint, optionally with basic auth.
#[derive(Debug, Clone)]
pub struct RemoteCallPolicy {
    url: String,
    basic_auth_username: Option<String>,
    basic_auth_password: Option<SecretString>,
}

impl RemoteCallPolicy {
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        basic_auth_username: Option<String>,
        basic_auth_password: Option<SecretString>,
    ) -> Self {
        Self {
            url: url.into(),
            basic_auth_username,
            basic_auth_password,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn basic_auth_username(&self) -> Option<&str> {
        self.basic_auth_username.as_deref()
    }

    #[must_use]
    pub fn basic_auth_password(&self) -> Option<&SecretString> {
        self.basic_auth_password.as_ref()
    }
}

// Secrets do not implement `PartialEq`; compare the exposed values.
impl PartialEq for RemoteCallPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.basic_auth_username == other.basic_auth_username
            && self.basic_auth_password.as_ref().map(ExposeSecret::expose_secret)
                == other
                    .basic_auth_password
                    .as_ref()
                    .map(ExposeSecret::expose_secret)
    }
}

impl Eq for RemoteCallPolicy {}

/// A single obligation the authentication engine must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationPolicy {
    AtLeastOneCredentialValidated(AtLeastOneCredentialValidatedPolicy),
    AllHandlersSucceeded(AllHandlersSucceededPolicy),
    NotPrevented(NotPreventedPolicy),
    Scripted(ScriptedPolicy),
    RemoteCall(RemoteCallPolicy),
}

impl AuthenticationPolicy {
    /// Stable `snake_case` name of the policy kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AtLeastOneCredentialValidated(_) => "at_least_one_credential_validated",
            Self::AllHandlersSucceeded(_) => "all_handlers_succeeded",
            Self::NotPrevented(_) => "not_prevented",
            Self::Scripted(_) => "scripted",
            Self::RemoteCall(_) => "remote_call",
        }
    }
}

impl From<AtLeastOneCredentialValidatedPolicy> for AuthenticationPolicy {
    fn from(p: AtLeastOneCredentialValidatedPolicy) -> Self {
        Self::AtLeastOneCredentialValidated(p)
    }
}

impl From<AllHandlersSucceededPolicy> for AuthenticationPolicy {
    fn from(p: AllHandlersSucceededPolicy) -> Self {
        Self::AllHandlersSucceeded(p)
    }
}

impl From<NotPreventedPolicy> for AuthenticationPolicy {
    fn from(p: NotPreventedPolicy) -> Self {
        Self::NotPrevented(p)
    }
}

impl From<ScriptedPolicy> for AuthenticationPolicy {
    fn from(p: ScriptedPolicy) -> Self {
        Self::Scripted(p)
    }
}

impl From<RemoteCallPolicy> for AuthenticationPolicy {
    fn from(p: RemoteCallPolicy) -> Self {
        Self::RemoteCall(p)
    }
}

/// Ordered, duplicate-free collection of obligations.
///
/// Iteration follows insertion order, which downstream consumers may treat
/// as evaluation priority. Sets are small, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPolicySet {
    policies: Vec<AuthenticationPolicy>,
}

impl ResolvedPolicySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a policy. Returns `false` if an equal policy is already present.
    pub fn insert(&mut self, policy: impl Into<AuthenticationPolicy>) -> bool {
        let policy = policy.into();
        if self.policies.contains(&policy) {
            return false;
        }
        self.policies.push(policy);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuthenticationPolicy> {
        self.policies.iter()
    }

    /// Policy kinds in insertion order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.policies.iter().map(AuthenticationPolicy::kind).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<AuthenticationPolicy> {
        self.policies
    }
}

impl IntoIterator for ResolvedPolicySet {
    type Item = AuthenticationPolicy;
    type IntoIter = std::vec::IntoIter<AuthenticationPolicy>;

    fn into_iter(self) -> Self::IntoIter {
        self.policies.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedPolicySet {
    type Item = &'a AuthenticationPolicy;
    type IntoIter = std::slice::Iter<'a, AuthenticationPolicy>;

    fn into_iter(self) -> Self::IntoIter {
        self.policies.iter()
    }
}

impl FromIterator<AuthenticationPolicy> for ResolvedPolicySet {
    fn from_iter<I: IntoIterator<Item = AuthenticationPolicy>>(iter: I) -> Self {
        let mut set = Self::new();
        for policy in iter {
            set.insert(policy);
        }
        set
    }
}
