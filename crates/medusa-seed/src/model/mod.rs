//! Records held by the in-memory host. Each type implements
//! [`HostRecord`](commerce_host::HostRecord) and is served by its own
//! [`RecordActor`](commerce_host::RecordActor).

pub mod api_key;
pub mod error;
pub mod fulfillment;
pub mod link;
pub mod product;
pub mod region;
pub mod sales_channel;
pub mod stock_location;
pub mod store;
pub mod workflow_execution;

pub use api_key::*;
pub use error::ValidationError;
pub use fulfillment::*;
pub use link::*;
pub use product::*;
pub use region::*;
pub use sales_channel::*;
pub use stock_location::*;
pub use store::*;
pub use workflow_execution::*;
