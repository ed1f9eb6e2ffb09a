//! In-memory service registry.

use std::collections::HashSet;

use authn_policy_resolver_sdk::{RegisteredService, Service};
use regex::Regex;

use super::error::RegistryError;

struct Entry {
    pattern: Regex,
    service: RegisteredService,
}

/// Registered services held in memory, sorted by evaluation order.
///
/// Each `service_id` is compiled once and must match the whole canonical
/// service id.
pub struct InMemoryServiceRegistry {
    entries: Vec<Entry>,
}

impl InMemoryServiceRegistry {
    /// Build a registry from service definitions.
    ///
    /// # Errors
    ///
    /// - `InvalidPattern` if a `service_id` is not a valid regular expression
    /// - `DuplicateId` if two definitions share an id
    pub fn new(services: impl IntoIterator<Item = RegisteredService>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for service in services {
            if !seen.insert(service.id) {
                return Err(RegistryError::DuplicateId(service.id));
            }
            let pattern = Regex::new(&format!("^(?:{})$", service.service_id)).map_err(|e| {
                RegistryError::InvalidPattern {
                    id: service.id,
                    reason: e.to_string(),
                }
            })?;
            entries.push(Entry { pattern, service });
        }

        entries.sort_by_key(|e| (e.service.evaluation_order, e.service.id));
        Ok(Self { entries })
    }

    /// First registered service, in evaluation order, matching `service`.
    #[must_use]
    pub fn find(&self, service: &Service) -> Option<&RegisteredService> {
        self.entries
            .iter()
            .find(|e| e.pattern.is_match(&service.id))
            .map(|e| &e.service)
    }

    /// Registered services in evaluation order.
    pub fn services(&self) -> impl Iterator<Item = &RegisteredService> {
        self.entries.iter().map(|e| &e.service)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
