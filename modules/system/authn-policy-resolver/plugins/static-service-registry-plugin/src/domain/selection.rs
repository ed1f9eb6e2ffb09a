//! Service selection strategies.
//!
//! A [`ServiceSelectionPlan`] turns the raw service reference of a
//! transaction into the canonical service used for registry lookups.

use authn_policy_resolver_sdk::Service;

/// One way of normalizing a service reference.
pub trait ServiceSelectionStrategy: Send + Sync {
    /// Lower values are consulted first.
    fn order(&self) -> i32;

    fn supports(&self, service: &Service) -> bool;

    fn select(&self, service: &Service) -> Service;
}

/// Returns the service unchanged. Consulted last.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultServiceSelectionStrategy;

impl ServiceSelectionStrategy for DefaultServiceSelectionStrategy {
    fn order(&self) -> i32 {
        i32::MAX
    }

    fn supports(&self, _service: &Service) -> bool {
        true
    }

    fn select(&self, service: &Service) -> Service {
        service.clone()
    }
}

/// Drops the query string and fragment from the service id.
///
/// The original URL is kept as presented.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStrippingServiceSelectionStrategy;

impl ServiceSelectionStrategy for QueryStrippingServiceSelectionStrategy {
    fn order(&self) -> i32 {
        0
    }

    fn supports(&self, service: &Service) -> bool {
        service.id.contains(['?', '#'])
    }

    fn select(&self, service: &Service) -> Service {
        let id = service.id.split(['?', '#']).next().unwrap_or_default();
        Service {
            id: id.to_owned(),
            original_url: service
                .original_url
                .clone()
                .or_else(|| Some(service.id.clone())),
        }
    }
}

/// Ordered set of selection strategies; the first that supports a service wins.
pub struct ServiceSelectionPlan {
    strategies: Vec<Box<dyn ServiceSelectionStrategy>>,
}

impl Default for ServiceSelectionPlan {
    fn default() -> Self {
        Self::new(vec![Box::new(DefaultServiceSelectionStrategy)])
    }
}

impl ServiceSelectionPlan {
    #[must_use]
    pub fn new(mut strategies: Vec<Box<dyn ServiceSelectionStrategy>>) -> Self {
        strategies.sort_by_key(|s| s.order());
        Self { strategies }
    }

    /// Resolve the canonical service. `None` in, `None` out.
    #[must_use]
    pub fn resolve(&self, service: Option<&Service>) -> Option<Service> {
        let service = service?;
        let selected = self
            .strategies
            .iter()
            .find(|s| s.supports(service))
            .map_or_else(|| service.clone(), |s| s.select(service));
        tracing::trace!(
            service = %service,
            selected = %selected,
            "Resolved canonical service"
        );
        Some(selected)
    }
}
