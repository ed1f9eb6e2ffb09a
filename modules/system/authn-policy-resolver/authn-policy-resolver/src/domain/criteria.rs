//! Criteria-to-policy dispatch.

use authn_policy_resolver_sdk::{
    AllHandlersSucceededPolicy, AtLeastOneCredentialValidatedPolicy, NotPreventedPolicy,
    PolicyCriteria, RemoteCallPolicy, ResolvedPolicySet, ScriptedPolicy,
};

/// Build the obligations required by `criteria`.
///
/// Each criteria type maps to at most one policy. `DEFAULT` and
/// unrecognized criteria contribute nothing.
#[must_use]
pub fn build_policies(criteria: &PolicyCriteria) -> ResolvedPolicySet {
    let mut policies = ResolvedPolicySet::new();
    match criteria {
        PolicyCriteria::AnyHandler { try_all } => {
            policies.insert(AtLeastOneCredentialValidatedPolicy::new(*try_all));
        }
        PolicyCriteria::AllHandlers => {
            policies.insert(AllHandlersSucceededPolicy);
        }
        PolicyCriteria::NotPrevented => {
            policies.insert(NotPreventedPolicy);
        }
        PolicyCriteria::Scripted { script } => {
            policies.insert(ScriptedPolicy::new(script.as_str()));
        }
        PolicyCriteria::RemoteCall {
            url,
            basic_auth_username,
            basic_auth_password,
        } => {
            policies.insert(RemoteCallPolicy::new(
                url.as_str(),
                basic_auth_username.clone(),
                basic_auth_password.clone(),
            ));
        }
        PolicyCriteria::Default | PolicyCriteria::Unrecognized => {}
    }
    policies
}
