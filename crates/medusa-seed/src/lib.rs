//! # Medusa Seed
//!
//! Seeds a commerce host with a demo store, and assembles the host's configuration
//! from the environment.
//!
//! - **[model]**: record types held by the host ([`model::Store`], [`model::Region`],
//!   [`model::Product`], ...), each a [`HostRecord`](commerce_host::HostRecord).
//! - **[services]**: the traits the seed calls. It never looks a service up by name.
//! - **[clients]**: implementations of those traits over record actors.
//! - **[lifecycle]**: [`CommerceSystem`](lifecycle::CommerceSystem), the in-memory host.
//! - **[seed]**: [`seed_demo_data`](seed::seed_demo_data).
//! - **[config]**: [`ProjectConfig`](config::ProjectConfig).
//!
//! ```rust
//! use medusa_seed::lifecycle::CommerceSystem;
//! use medusa_seed::seed::seed_demo_data;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = CommerceSystem::start().await?;
//!     let report = seed_demo_data(&system.seed_context(tracing::info_span!("seed"))).await?;
//!     assert_eq!(report.product_ids.len(), 4);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod services;

pub use error::SeedError;
