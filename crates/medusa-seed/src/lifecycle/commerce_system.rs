use crate::clients::{FulfillmentClient, HostWorkflows, LinkClient, SalesChannelClient, StoreClient};
use crate::model::{
    ApiKey, FulfillmentSet, Link, Product, ProductCategory, Region, SalesChannel, ShippingOption, ShippingProfile,
    StockLocation, Store, TaxRegion, WorkflowExecution,
};
use crate::seed::SeedContext;
use commerce_host::{HostError, HostRecord, RecordActor, RecordClient};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, Span};

/// Request channel capacity of every record actor.
const MAILBOX_SIZE: usize = 32;

/// Name of the store the host bootstraps with.
pub const DEFAULT_STORE_NAME: &str = "Medusa Store";

/// The running in-memory host.
///
/// ```ignore
/// let system = CommerceSystem::start().await?;
/// let report = seed_demo_data(&system.seed_context(info_span!("seed"))).await?;
/// system.shutdown().await?;
/// ```
pub struct CommerceSystem {
    pub stores: StoreClient,
    pub sales_channels: SalesChannelClient,
    pub fulfillment: FulfillmentClient,
    pub links: LinkClient,
    /// Also the way to read back regions, products and the workflow journal.
    pub workflows: HostWorkflows,
    handles: Vec<JoinHandle<()>>,
}

fn spawn<T: HostRecord>(context: T::Context, handles: &mut Vec<JoinHandle<()>>) -> RecordClient<T> {
    let (actor, client) = RecordActor::<T>::new(MAILBOX_SIZE);
    handles.push(tokio::spawn(actor.run(context)));
    client
}

impl CommerceSystem {
    /// Spawns every record actor. Tables start empty; see [`bootstrap`](Self::bootstrap).
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let mut handles = Vec::new();

        let categories = spawn::<ProductCategory>((), &mut handles);
        // Products check category ids against the category table
        let products = spawn::<Product>(categories.clone(), &mut handles);

        let fulfillment_sets = spawn::<FulfillmentSet>((), &mut handles);
        let links = spawn::<Link>((), &mut handles);

        let workflows = HostWorkflows {
            stores: spawn::<Store>((), &mut handles),
            sales_channels: spawn::<SalesChannel>((), &mut handles),
            regions: spawn::<Region>((), &mut handles),
            tax_regions: spawn::<TaxRegion>((), &mut handles),
            stock_locations: spawn::<StockLocation>((), &mut handles),
            shipping_profiles: spawn::<ShippingProfile>((), &mut handles),
            shipping_options: spawn::<ShippingOption>((), &mut handles),
            api_keys: spawn::<ApiKey>((), &mut handles),
            categories,
            products,
            links: links.clone(),
            executions: spawn::<WorkflowExecution>((), &mut handles),
        };

        info!(actors = handles.len(), "Commerce host started");

        Self {
            stores: StoreClient::new(workflows.stores.clone()),
            sales_channels: SalesChannelClient::new(workflows.sales_channels.clone()),
            fulfillment: FulfillmentClient::new(fulfillment_sets),
            links: LinkClient::new(links),
            workflows,
            handles,
        }
    }

    /// Creates the single store every host starts with.
    pub async fn bootstrap(&self, store_name: &str) -> Result<Store, HostError> {
        let store = self.stores.create_store(store_name).await?;
        info!(store_id = %store.id, name = %store.name, "Store bootstrapped");
        Ok(store)
    }

    /// [`new`](Self::new) followed by [`bootstrap`](Self::bootstrap) with
    /// [`DEFAULT_STORE_NAME`].
    pub async fn start() -> Result<Self, HostError> {
        let system = Self::new();
        system.bootstrap(DEFAULT_STORE_NAME).await?;
        Ok(system)
    }

    /// Service handles for the seed procedure, logging under `logger`.
    pub fn seed_context(&self, logger: Span) -> SeedContext {
        SeedContext {
            logger,
            link: Arc::new(self.links.clone()),
            fulfillment: Arc::new(self.fulfillment.clone()),
            sales_channels: Arc::new(self.sales_channels.clone()),
            stores: Arc::new(self.stores.clone()),
            workflows: Arc::new(self.workflows.clone()),
        }
    }

    /// Drops every client and waits for the actors to stop.
    ///
    /// Fails with the first actor task that panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down commerce host...");

        drop(self.stores);
        drop(self.sales_channels);
        drop(self.fulfillment);
        drop(self.links);
        drop(self.workflows);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Commerce host shutdown complete.");
        Ok(())
    }
}

impl Default for CommerceSystem {
    fn default() -> Self {
        Self::new()
    }
}
