//! # Workflows
//!
//! One method per workflow the seed runs. Each takes a typed input and returns the
//! records the workflow produced, in input order.

use crate::model::{
    ApiKey, ApiKeyCreate, Link, Product, ProductCategory, ProductCategoryCreate, ProductCreate, Region,
    RegionCreate, SalesChannel, SalesChannelCreate, ShippingOption, ShippingOptionCreate, ShippingProfile,
    ShippingProfileCreate, StockLocation, StockLocationCreate, Store, StoreUpdate, TaxRegion, TaxRegionCreate,
};
use async_trait::async_trait;
use commerce_host::{HostError, RecordId};
use serde::Serialize;

/// Result of a workflow run: the records it produced.
pub type WorkflowResult<T> = Result<Vec<T>, HostError>;

/// Workflow names as they appear in the execution journal.
pub mod names {
    pub const CREATE_SALES_CHANNELS: &str = "create-sales-channels";
    pub const UPDATE_STORES: &str = "update-stores";
    pub const CREATE_REGIONS: &str = "create-regions";
    pub const CREATE_TAX_REGIONS: &str = "create-tax-regions";
    pub const CREATE_STOCK_LOCATIONS: &str = "create-stock-locations";
    pub const CREATE_SHIPPING_PROFILES: &str = "create-shipping-profiles";
    pub const CREATE_SHIPPING_OPTIONS: &str = "create-shipping-options";
    pub const LINK_SALES_CHANNELS_TO_STOCK_LOCATION: &str = "link-sales-channels-to-stock-location";
    pub const CREATE_API_KEYS: &str = "create-api-keys";
    pub const LINK_SALES_CHANNELS_TO_API_KEY: &str = "link-sales-channels-to-api-key";
    pub const CREATE_PRODUCT_CATEGORIES: &str = "create-product-categories";
    pub const CREATE_PRODUCTS: &str = "create-products";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSelector {
    pub id: RecordId,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStoresInput {
    pub selector: StoreSelector,
    pub update: StoreUpdate,
}

/// Attaches sales channels to the record `id` (a stock location or an API key).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkSalesChannelsInput {
    pub id: RecordId,
    pub add: Vec<RecordId>,
}

#[async_trait]
pub trait Workflows: Send + Sync {
    async fn create_sales_channels(&self, input: Vec<SalesChannelCreate>) -> WorkflowResult<SalesChannel>;

    async fn update_stores(&self, input: UpdateStoresInput) -> WorkflowResult<Store>;

    async fn create_regions(&self, input: Vec<RegionCreate>) -> WorkflowResult<Region>;

    async fn create_tax_regions(&self, input: Vec<TaxRegionCreate>) -> WorkflowResult<TaxRegion>;

    async fn create_stock_locations(&self, input: Vec<StockLocationCreate>) -> WorkflowResult<StockLocation>;

    async fn create_shipping_profiles(&self, input: Vec<ShippingProfileCreate>) -> WorkflowResult<ShippingProfile>;

    async fn create_shipping_options(&self, input: Vec<ShippingOptionCreate>) -> WorkflowResult<ShippingOption>;

    async fn link_sales_channels_to_stock_location(&self, input: LinkSalesChannelsInput) -> WorkflowResult<Link>;

    async fn create_api_keys(&self, input: Vec<ApiKeyCreate>) -> WorkflowResult<ApiKey>;

    async fn link_sales_channels_to_api_key(&self, input: LinkSalesChannelsInput) -> WorkflowResult<Link>;

    async fn create_product_categories(&self, input: Vec<ProductCategoryCreate>) -> WorkflowResult<ProductCategory>;

    async fn create_products(&self, input: Vec<ProductCreate>) -> WorkflowResult<Product>;
}
