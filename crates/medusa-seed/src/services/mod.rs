//! # Service Contracts
//!
//! The seed procedure never looks services up by name. It receives one typed handle per
//! collaborator (see [`SeedContext`](crate::seed::SeedContext)), each an implementation
//! of a trait below. The in-memory host implements them in [`crate::clients`]; another
//! host could implement them over HTTP or a database.
//!
//! All failures are [`HostError`]s and are propagated unmodified.

pub mod workflows;

pub use workflows::*;

use crate::model::{FulfillmentSet, FulfillmentSetCreate, Link, LinkDefinition, SalesChannel, SalesChannelFilter, Store};
use async_trait::async_trait;
use commerce_host::HostError;

/// Read access to stores.
#[async_trait]
pub trait StoreService: Send + Sync {
    async fn list_stores(&self) -> Result<Vec<Store>, HostError>;
}

/// Read access to sales channels.
#[async_trait]
pub trait SalesChannelService: Send + Sync {
    async fn list_sales_channels(&self, filter: SalesChannelFilter) -> Result<Vec<SalesChannel>, HostError>;
}

/// Direct fulfillment-module calls that have no workflow wrapper.
#[async_trait]
pub trait FulfillmentService: Send + Sync {
    async fn create_fulfillment_sets(&self, data: FulfillmentSetCreate) -> Result<FulfillmentSet, HostError>;
}

/// Creates associations between records owned by different modules.
#[async_trait]
pub trait RemoteLink: Send + Sync {
    async fn create(&self, definition: LinkDefinition) -> Result<Link, HostError>;
}
