#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use authn_policy_resolver::{AuthnPolicyResolverConfig, AuthnPolicyResolverModule};
use authn_policy_resolver_sdk::{
    AuthenticationPolicy, AuthenticationPolicyResolverClient, AuthenticationTransaction,
    AuthnPolicyResolverError, Credential, Service,
};
use secrecy::ExposeSecret;
use serde_json::json;
use static_service_registry_plugin::StaticServiceRegistryPlugin;
use static_service_registry_plugin::config::StaticServiceRegistryPluginConfig;

fn registry_config() -> StaticServiceRegistryPluginConfig {
    serde_json::from_value(json!({
        "selection": { "strip_query": true },
        "services": [
            {
                "id": 1, "name": "any", "service_id": "serviceid1",
                "authentication_policy": {
                    "criteria": { "type": "ANY_HANDLER", "try_all": true }
                }
            },
            {
                "id": 2, "name": "default", "service_id": "serviceid2",
                "authentication_policy": {}
            },
            {
                "id": 3, "name": "all", "service_id": "serviceid3",
                "authentication_policy": { "criteria": { "type": "ALL_HANDLERS" } }
            },
            {
                "id": 4, "name": "not-prevented", "service_id": "serviceid4",
                "authentication_policy": { "criteria": { "type": "NOT_PREVENTED" } }
            },
            {
                "id": 5, "name": "scripted", "service_id": "serviceid5",
                "authentication_policy": {
                    "criteria": {
                        "type": "SCRIPTED",
                        "script": "groovy { return Optional.empty() }"
                    }
                }
            },
            {
                "id": 6, "name": "remote", "service_id": "serviceid6",
                "authentication_policy": {
                    "criteria": {
                        "type": "REMOTE_CALL",
                        "url": "https://example.org",
                        "basic_auth_username": "u",
                        "basic_auth_password": "p"
                    }
                }
            },
            {
                "id": 7, "name": "no-sso", "service_id": "serviceid7",
                "access_strategy": { "sso_enabled": false },
                "authentication_policy": { "criteria": { "type": "ALL_HANDLERS" } }
            },
            {
                "id": 8, "name": "explicit-default", "service_id": "serviceid8",
                "authentication_policy": { "criteria": { "type": "DEFAULT" } }
            },
            {
                "id": 9, "name": "multifactor", "service_id": "serviceid9",
                "authentication_policy": { "criteria": { "type": "MULTIFACTOR" } }
            }
        ]
    }))
    .unwrap()
}

fn resolver() -> Arc<dyn AuthenticationPolicyResolverClient> {
    let plugin = StaticServiceRegistryPlugin::from_config(&registry_config()).unwrap();
    AuthnPolicyResolverModule::new()
        .init(
            &AuthnPolicyResolverConfig { order: 10 },
            plugin.selector(),
            plugin.directory(),
        )
        .unwrap()
}

fn transaction(service: &str) -> AuthenticationTransaction {
    AuthenticationTransaction::of(
        Some(Service::new(service)),
        [Credential::username_password("casuser", "casuser")],
    )
}

async fn single_policy(service: &str) -> AuthenticationPolicy {
    let resolver = resolver();
    let tx = transaction(service);

    assert!(resolver.supports(&tx).await.unwrap());
    let policies = resolver.resolve(&tx).await.unwrap();
    assert_eq!(policies.len(), 1);
    policies.into_iter().next().unwrap()
}

#[tokio::test]
async fn any_handler_policy() {
    match single_policy("serviceid1").await {
        AuthenticationPolicy::AtLeastOneCredentialValidated(p) => assert!(p.try_all()),
        other => panic!("Expected at-least-one policy, got: {other:?}"),
    }
}

#[tokio::test]
async fn all_handlers_policy() {
    assert!(matches!(
        single_policy("serviceid3").await,
        AuthenticationPolicy::AllHandlersSucceeded(_)
    ));
}

#[tokio::test]
async fn not_prevented_policy() {
    assert!(matches!(
        single_policy("serviceid4").await,
        AuthenticationPolicy::NotPrevented(_)
    ));
}

#[tokio::test]
async fn scripted_policy() {
    match single_policy("serviceid5").await {
        AuthenticationPolicy::Scripted(p) => {
            assert_eq!(p.script(), "groovy { return Optional.empty() }");
        }
        other => panic!("Expected scripted policy, got: {other:?}"),
    }
}

#[tokio::test]
async fn remote_call_policy() {
    match single_policy("serviceid6").await {
        AuthenticationPolicy::RemoteCall(p) => {
            assert_eq!(p.url(), "https://example.org");
            assert_eq!(p.basic_auth_username(), Some("u"));
            assert_eq!(
                p.basic_auth_password().map(ExposeSecret::expose_secret),
                Some("p")
            );
        }
        other => panic!("Expected remote-call policy, got: {other:?}"),
    }
}

#[tokio::test]
async fn default_policy_is_not_applicable() {
    let resolver = resolver();

    for service in ["serviceid2", "serviceid8"] {
        let tx = transaction(service);
        assert!(!resolver.supports(&tx).await.unwrap());
        assert!(resolver.resolve(&tx).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn unrecognized_criteria_type_is_not_applicable() {
    let resolver = resolver();
    let tx = transaction("serviceid9");

    assert!(!resolver.supports(&tx).await.unwrap());
    assert!(resolver.resolve(&tx).await.unwrap().is_empty());
}

#[tokio::test]
async fn sso_denied_service_is_unauthorized() {
    let resolver = resolver();

    match resolver.supports(&transaction("serviceid7")).await {
        Err(AuthnPolicyResolverError::UnauthorizedService { service }) => {
            assert_eq!(service, "serviceid7");
        }
        other => panic!("Expected UnauthorizedService, got: {other:?}"),
    }
}

#[tokio::test]
async fn unregistered_service_is_unauthorized_but_resolves_empty() {
    let resolver = resolver();
    let tx = transaction("https://unknown.example.org");

    assert!(matches!(
        resolver.supports(&tx).await,
        Err(AuthnPolicyResolverError::UnauthorizedService { .. })
    ));
    assert!(resolver.resolve(&tx).await.unwrap().is_empty());
}

#[tokio::test]
async fn transaction_without_service_is_not_applicable() {
    let resolver = resolver();
    let tx = AuthenticationTransaction::of(None, [Credential::username_password("casuser", "x")]);

    assert!(!resolver.supports(&tx).await.unwrap());
    assert!(resolver.resolve(&tx).await.unwrap().is_empty());
}

#[tokio::test]
async fn query_string_is_ignored_during_selection() {
    let resolver = resolver();
    let tx = transaction("serviceid3?renew=true");

    assert!(resolver.supports(&tx).await.unwrap());
    assert_eq!(
        resolver.resolve(&tx).await.unwrap().kinds(),
        vec!["all_handlers_succeeded"]
    );
}

#[tokio::test]
async fn resolve_is_idempotent() {
    let resolver = resolver();
    let tx = transaction("serviceid6");

    let first = resolver.resolve(&tx).await.unwrap();
    let second = resolver.resolve(&tx).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn order_comes_from_config() {
    assert_eq!(resolver().order(), 10);
}

#[test]
fn module_initializes_once() {
    let plugin = StaticServiceRegistryPlugin::from_config(&registry_config()).unwrap();
    let module = AuthnPolicyResolverModule::new();
    let cfg = AuthnPolicyResolverConfig::default();

    assert!(module.service().is_none());
    assert!(
        module
            .init(&cfg, plugin.selector(), plugin.directory())
            .is_ok()
    );
    assert!(module.service().is_some());
    assert!(
        module
            .init(&cfg, plugin.selector(), plugin.directory())
            .is_err()
    );
}
