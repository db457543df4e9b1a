//! # Host Workflows
//!
//! The in-memory host's implementation of [`Workflows`]. A workflow here is:
//! journal the run, then create (or update, or link) the records in input order.
//! Nothing is compensated: if the third record of a batch is rejected, the first two
//! stay.
use crate::model::{
    ApiKey, ApiKeyCreate, Link, LinkDefinition, Module, Product, ProductCategory, ProductCategoryCreate,
    ProductCreate, Region, RegionCreate, SalesChannel, SalesChannelCreate, ShippingOption, ShippingOptionCreate,
    ShippingProfile, ShippingProfileCreate, StockLocation, StockLocationCreate, Store, TaxRegion, TaxRegionCreate,
    WorkflowExecution, WorkflowExecutionCreate,
};
use crate::services::{names, LinkSalesChannelsInput, UpdateStoresInput, WorkflowResult, Workflows};
use async_trait::async_trait;
use commerce_host::{HostError, HostRecord, RecordClient, RecordId};
use serde::Serialize;
use tracing::{info, instrument};

/// Record tables the workflows write to. Fields are public so callers can read back
/// what a workflow produced.
#[derive(Clone)]
pub struct HostWorkflows {
    pub stores: RecordClient<Store>,
    pub sales_channels: RecordClient<SalesChannel>,
    pub regions: RecordClient<Region>,
    pub tax_regions: RecordClient<TaxRegion>,
    pub stock_locations: RecordClient<StockLocation>,
    pub shipping_profiles: RecordClient<ShippingProfile>,
    pub shipping_options: RecordClient<ShippingOption>,
    pub api_keys: RecordClient<ApiKey>,
    pub categories: RecordClient<ProductCategory>,
    pub products: RecordClient<Product>,
    pub links: RecordClient<Link>,
    pub executions: RecordClient<WorkflowExecution>,
}

/// Fetches a record or fails with `NotFound`.
async fn require<T: HostRecord>(client: &RecordClient<T>, id: &RecordId) -> Result<T, HostError> {
    client
        .get(id.clone())
        .await?
        .ok_or_else(|| HostError::NotFound(id.to_string()))
}

impl HostWorkflows {
    async fn journal<I: Serialize>(&self, workflow: &str, input: &I) -> Result<(), HostError> {
        let input = serde_json::to_value(input).map_err(|e| HostError::Record(Box::new(e)))?;
        self.executions
            .create(WorkflowExecutionCreate {
                workflow: workflow.to_string(),
                input,
            })
            .await?;
        info!(workflow, "Running workflow");
        Ok(())
    }

    /// Links each sales channel in `add` to the record on the other side.
    async fn link_sales_channels(
        &self,
        other: Module,
        other_field: &str,
        input: LinkSalesChannelsInput,
    ) -> WorkflowResult<Link> {
        let mut links = Vec::with_capacity(input.add.len());
        for channel_id in &input.add {
            require(&self.sales_channels, channel_id).await?;
            let definition = LinkDefinition::new()
                .with(Module::SalesChannel, "sales_channel_id", channel_id.as_str())
                .with(other, other_field, input.id.as_str());
            links.push(self.links.create(definition).await?);
        }
        Ok(links)
    }
}

#[async_trait]
impl Workflows for HostWorkflows {
    #[instrument(skip_all)]
    async fn create_sales_channels(&self, input: Vec<SalesChannelCreate>) -> WorkflowResult<SalesChannel> {
        self.journal(names::CREATE_SALES_CHANNELS, &input).await?;
        self.sales_channels.create_many(input).await
    }

    #[instrument(skip_all, fields(store_id = %input.selector.id))]
    async fn update_stores(&self, input: UpdateStoresInput) -> WorkflowResult<Store> {
        self.journal(names::UPDATE_STORES, &input).await?;
        if let Some(channel_id) = &input.update.default_sales_channel_id {
            require(&self.sales_channels, channel_id).await?;
        }
        let store = self.stores.update(input.selector.id, input.update).await?;
        Ok(vec![store])
    }

    #[instrument(skip_all)]
    async fn create_regions(&self, input: Vec<RegionCreate>) -> WorkflowResult<Region> {
        self.journal(names::CREATE_REGIONS, &input).await?;
        self.regions.create_many(input).await
    }

    #[instrument(skip_all)]
    async fn create_tax_regions(&self, input: Vec<TaxRegionCreate>) -> WorkflowResult<TaxRegion> {
        self.journal(names::CREATE_TAX_REGIONS, &input).await?;
        self.tax_regions.create_many(input).await
    }

    #[instrument(skip_all)]
    async fn create_stock_locations(&self, input: Vec<StockLocationCreate>) -> WorkflowResult<StockLocation> {
        self.journal(names::CREATE_STOCK_LOCATIONS, &input).await?;
        self.stock_locations.create_many(input).await
    }

    #[instrument(skip_all)]
    async fn create_shipping_profiles(&self, input: Vec<ShippingProfileCreate>) -> WorkflowResult<ShippingProfile> {
        self.journal(names::CREATE_SHIPPING_PROFILES, &input).await?;
        self.shipping_profiles.create_many(input).await
    }

    #[instrument(skip_all)]
    async fn create_shipping_options(&self, input: Vec<ShippingOptionCreate>) -> WorkflowResult<ShippingOption> {
        self.journal(names::CREATE_SHIPPING_OPTIONS, &input).await?;
        for option in &input {
            require(&self.shipping_profiles, &option.shipping_profile_id).await?;
        }
        self.shipping_options.create_many(input).await
    }

    #[instrument(skip_all, fields(stock_location_id = %input.id))]
    async fn link_sales_channels_to_stock_location(&self, input: LinkSalesChannelsInput) -> WorkflowResult<Link> {
        self.journal(names::LINK_SALES_CHANNELS_TO_STOCK_LOCATION, &input).await?;
        require(&self.stock_locations, &input.id).await?;
        self.link_sales_channels(Module::StockLocation, "stock_location_id", input)
            .await
    }

    #[instrument(skip_all)]
    async fn create_api_keys(&self, input: Vec<ApiKeyCreate>) -> WorkflowResult<ApiKey> {
        self.journal(names::CREATE_API_KEYS, &input).await?;
        self.api_keys.create_many(input).await
    }

    #[instrument(skip_all, fields(api_key_id = %input.id))]
    async fn link_sales_channels_to_api_key(&self, input: LinkSalesChannelsInput) -> WorkflowResult<Link> {
        self.journal(names::LINK_SALES_CHANNELS_TO_API_KEY, &input).await?;
        require(&self.api_keys, &input.id).await?;
        self.link_sales_channels(Module::ApiKey, "publishable_key_id", input)
            .await
    }

    #[instrument(skip_all)]
    async fn create_product_categories(&self, input: Vec<ProductCategoryCreate>) -> WorkflowResult<ProductCategory> {
        self.journal(names::CREATE_PRODUCT_CATEGORIES, &input).await?;
        self.categories.create_many(input).await
    }

    #[instrument(skip_all)]
    async fn create_products(&self, input: Vec<ProductCreate>) -> WorkflowResult<Product> {
        self.journal(names::CREATE_PRODUCTS, &input).await?;
        self.products.create_many(input).await
    }
}
