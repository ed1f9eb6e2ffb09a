//! Domain layer for the static service registry plugin.

mod client;
pub mod error;
pub mod registry;
pub mod selection;

pub use error::RegistryError;
pub use registry::InMemoryServiceRegistry;
pub use selection::{
    DefaultServiceSelectionStrategy, QueryStrippingServiceSelectionStrategy,
    ServiceSelectionPlan, ServiceSelectionStrategy,
};
