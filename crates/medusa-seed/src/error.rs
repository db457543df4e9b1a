//! # Seed Errors

use commerce_host::HostError;

/// Errors that abort a seeding run.
///
/// Nothing is rolled back: records created before the failing step stay.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("No store exists; the host must create one before seeding")]
    MissingStore,
    #[error("No product category named {0:?}")]
    MissingCategory(String),
    #[error("Workflow {0} returned no records")]
    EmptyResult(&'static str),
}
