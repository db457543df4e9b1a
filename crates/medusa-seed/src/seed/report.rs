use commerce_host::RecordId;
use serde::Serialize;

/// Ids a seeding run created or reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedReport {
    pub store_id: RecordId,
    pub sales_channel_id: RecordId,
    /// False when "Default Sales Channel" already existed.
    pub sales_channel_created: bool,
    pub region_id: RecordId,
    pub tax_region_ids: Vec<RecordId>,
    pub stock_location_id: RecordId,
    pub shipping_profile_id: RecordId,
    pub fulfillment_set_id: RecordId,
    pub service_zone_id: RecordId,
    pub shipping_option_ids: Vec<RecordId>,
    pub api_key_id: RecordId,
    pub publishable_token: String,
    pub category_ids: Vec<RecordId>,
    pub product_ids: Vec<RecordId>,
}
