pub mod date_arithmetic;
pub mod expiry_eviction_service;
pub mod profile;
pub mod profile_registry;
pub mod profile_validation;

#[cfg(test)]
mod tests;

pub use date_arithmetic::{add_calendar_months, age_in_years};
pub use expiry_eviction_service::{ExpiryEvictionConfig, ExpiryEvictionService};
pub use profile::{Gender, Profile, ProfileInput};
pub use profile_registry::{ProfileRegistry, RegistryMetricsSnapshot};
pub use profile_validation::ProfileValidationError;
