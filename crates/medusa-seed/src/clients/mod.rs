//! Actor-backed implementations of the [service contracts](crate::services).
//!
//! Each client wraps one or more [`RecordClient`](commerce_host::RecordClient)s and
//! hides the message passing behind the trait the seed procedure expects.

pub mod fulfillment_client;
pub mod link_client;
pub mod sales_channel_client;
pub mod store_client;
pub mod workflow_client;

pub use fulfillment_client::FulfillmentClient;
pub use link_client::LinkClient;
pub use sales_channel_client::SalesChannelClient;
pub use store_client::StoreClient;
pub use workflow_client::HostWorkflows;
