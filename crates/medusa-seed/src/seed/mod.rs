//! # Demo Store Seeding
//!
//! [`seed_demo_data`] populates an empty host with a demo store: a default sales
//! channel, the "Europe" region and its tax regions, a Copenhagen warehouse with
//! standard and express shipping, a publishable API key and four apparel products.
//!
//! Every call is awaited before the next one, and ids returned by one step feed the
//! later ones. The first error aborts the run and is returned as is. Nothing is retried
//! or rolled back, so a failed run leaves the records of the completed steps behind.
//!
//! Only the sales channel is looked up before being created. Running the seed twice
//! yields a second region, second warehouse, second set of products, and so on.
//!
//! ## Sales channel race
//!
//! The "Default Sales Channel" lookup and creation are two separate calls. Two seeds
//! running at once can both see no channel and both create one.

pub mod catalog;
pub mod context;
pub mod fixtures;
pub mod report;

pub use catalog::CategoryIndex;
pub use context::SeedContext;
pub use report::SeedReport;

use crate::error::SeedError;
use crate::model::{
    ApiKey, FulfillmentSet, LinkDefinition, Module, ProductCategory, Region, SalesChannel, SalesChannelFilter,
    ShippingOption, ShippingProfile, StockLocation, Store,
};
use crate::services::{names, LinkSalesChannelsInput, StoreSelector, UpdateStoresInput};
use commerce_host::RecordId;
use tracing::{info, Instrument};

/// The first record of a workflow result.
fn first<T>(records: Vec<T>, workflow: &'static str) -> Result<T, SeedError> {
    records
        .into_iter()
        .next()
        .ok_or(SeedError::EmptyResult(workflow))
}

/// Seeds the demo store. See the [module docs](self) for the guarantees.
pub async fn seed_demo_data(ctx: &SeedContext) -> Result<SeedReport, SeedError> {
    run(ctx).instrument(ctx.logger.clone()).await
}

async fn run(ctx: &SeedContext) -> Result<SeedReport, SeedError> {
    let (store, sales_channel, sales_channel_created) = seed_store(ctx).await?;
    let region = seed_region(ctx).await?;
    let tax_region_ids = seed_tax_regions(ctx).await?;
    let warehouse = seed_stock_location(ctx, &region, &sales_channel).await?;
    let api_key = seed_publishable_key(ctx, &sales_channel).await?;
    let (categories, product_ids) = seed_products(ctx, &sales_channel).await?;

    Ok(SeedReport {
        store_id: store.id,
        sales_channel_id: sales_channel.id,
        sales_channel_created,
        region_id: region.id,
        tax_region_ids,
        stock_location_id: warehouse.location.id,
        shipping_profile_id: warehouse.profile.id,
        service_zone_id: warehouse.service_zone_id,
        fulfillment_set_id: warehouse.fulfillment_set.id,
        shipping_option_ids: warehouse.options.into_iter().map(|o| o.id).collect(),
        api_key_id: api_key.id,
        publishable_token: api_key.token,
        category_ids: categories.into_iter().map(|c| c.id).collect(),
        product_ids,
    })
}

/// Reads the store, finds or creates the default channel, then sets currencies.
async fn seed_store(ctx: &SeedContext) -> Result<(Store, SalesChannel, bool), SeedError> {
    info!("Seeding store data...");
    let store = ctx
        .stores
        .list_stores()
        .await?
        .into_iter()
        .next()
        .ok_or(SeedError::MissingStore)?;

    let existing = ctx
        .sales_channels
        .list_sales_channels(SalesChannelFilter::by_name(fixtures::DEFAULT_SALES_CHANNEL))
        .await?;
    let (sales_channel, created) = match existing.into_iter().next() {
        Some(channel) => (channel, false),
        None => {
            let created = ctx
                .workflows
                .create_sales_channels(vec![fixtures::default_sales_channel()])
                .await?;
            (first(created, names::CREATE_SALES_CHANNELS)?, true)
        }
    };

    let updated = ctx
        .workflows
        .update_stores(UpdateStoresInput {
            selector: StoreSelector { id: store.id.clone() },
            update: fixtures::store_update(sales_channel.id.clone()),
        })
        .await?;
    let store = first(updated, names::UPDATE_STORES)?;
    Ok((store, sales_channel, created))
}

async fn seed_region(ctx: &SeedContext) -> Result<Region, SeedError> {
    info!("Seeding region data...");
    let regions = ctx.workflows.create_regions(vec![fixtures::europe()]).await?;
    let region = first(regions, names::CREATE_REGIONS)?;
    info!("Finished seeding regions.");
    Ok(region)
}

async fn seed_tax_regions(ctx: &SeedContext) -> Result<Vec<RecordId>, SeedError> {
    info!("Seeding tax regions...");
    let tax_regions = ctx.workflows.create_tax_regions(fixtures::tax_regions()).await?;
    info!("Finished seeding tax regions.");
    Ok(tax_regions.into_iter().map(|t| t.id).collect())
}

/// What the stock location step produced.
struct Warehouse {
    location: StockLocation,
    profile: ShippingProfile,
    fulfillment_set: FulfillmentSet,
    service_zone_id: RecordId,
    options: Vec<ShippingOption>,
}

async fn seed_stock_location(
    ctx: &SeedContext,
    region: &Region,
    sales_channel: &SalesChannel,
) -> Result<Warehouse, SeedError> {
    info!("Seeding stock location data...");
    let locations = ctx
        .workflows
        .create_stock_locations(vec![fixtures::european_warehouse()])
        .await?;
    let location = first(locations, names::CREATE_STOCK_LOCATIONS)?;

    ctx.link
        .create(
            LinkDefinition::new()
                .with(Module::StockLocation, "stock_location_id", location.id.as_str())
                .with(Module::Fulfillment, "fulfillment_provider_id", fixtures::FULFILLMENT_PROVIDER),
        )
        .await?;

    info!("Seeding fulfillment data...");
    let profiles = ctx
        .workflows
        .create_shipping_profiles(vec![fixtures::default_shipping_profile()])
        .await?;
    let profile = first(profiles, names::CREATE_SHIPPING_PROFILES)?;

    let fulfillment_set = ctx
        .fulfillment
        .create_fulfillment_sets(fixtures::european_delivery())
        .await?;
    let service_zone_id = fulfillment_set
        .service_zones
        .first()
        .map(|zone| zone.id.clone())
        .ok_or(SeedError::EmptyResult("create-fulfillment-sets"))?;

    ctx.link
        .create(
            LinkDefinition::new()
                .with(Module::StockLocation, "stock_location_id", location.id.as_str())
                .with(Module::Fulfillment, "fulfillment_set_id", fulfillment_set.id.as_str()),
        )
        .await?;

    let options = ctx
        .workflows
        .create_shipping_options(fixtures::shipping_options(&service_zone_id, &profile.id, &region.id))
        .await?;
    info!("Finished seeding fulfillment data.");

    ctx.workflows
        .link_sales_channels_to_stock_location(LinkSalesChannelsInput {
            id: location.id.clone(),
            add: vec![sales_channel.id.clone()],
        })
        .await?;
    info!("Finished seeding stock location data.");

    Ok(Warehouse {
        location,
        profile,
        fulfillment_set,
        service_zone_id,
        options,
    })
}

async fn seed_publishable_key(ctx: &SeedContext, sales_channel: &SalesChannel) -> Result<ApiKey, SeedError> {
    info!("Seeding publishable API key data...");
    let keys = ctx.workflows.create_api_keys(vec![fixtures::webshop_key()]).await?;
    let key = first(keys, names::CREATE_API_KEYS)?;

    ctx.workflows
        .link_sales_channels_to_api_key(LinkSalesChannelsInput {
            id: key.id.clone(),
            add: vec![sales_channel.id.clone()],
        })
        .await?;
    info!("Finished seeding publishable API key data.");
    Ok(key)
}

/// Creates the categories, then each product with its own workflow run.
async fn seed_products(
    ctx: &SeedContext,
    sales_channel: &SalesChannel,
) -> Result<(Vec<ProductCategory>, Vec<RecordId>), SeedError> {
    info!("Seeding product data...");
    let categories = ctx
        .workflows
        .create_product_categories(fixtures::categories())
        .await?;
    let index = CategoryIndex::new(&categories);

    let mut product_ids = Vec::new();
    for product in fixtures::products(&index, &sales_channel.id) {
        let created = ctx.workflows.create_products(vec![product?]).await?;
        product_ids.extend(created.into_iter().map(|p| p.id));
    }
    info!("Finished seeding product data.");
    Ok((categories, product_ids))
}
