use crate::services::{FulfillmentService, RemoteLink, SalesChannelService, StoreService, Workflows};
use std::sync::Arc;
use tracing::Span;

/// Everything the seed procedure talks to, resolved up front.
///
/// Each handle is a trait object so the procedure can run against the in-memory host
/// ([`CommerceSystem::seed_context`](crate::lifecycle::CommerceSystem::seed_context)) or
/// any other implementation.
#[derive(Clone)]
pub struct SeedContext {
    /// Progress lines are logged inside this span.
    pub logger: Span,
    pub link: Arc<dyn RemoteLink>,
    pub fulfillment: Arc<dyn FulfillmentService>,
    pub sales_channels: Arc<dyn SalesChannelService>,
    pub stores: Arc<dyn StoreService>,
    pub workflows: Arc<dyn Workflows>,
}
