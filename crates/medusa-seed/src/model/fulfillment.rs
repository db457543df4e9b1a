//! Shipping profiles, fulfillment sets (with their service and geo zones) and
//! shipping options.

use super::error::{check_country_code, check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

// =============================================================================
// Shipping profiles
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingProfile {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingProfileCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: String,
}

#[async_trait]
impl HostRecord for ShippingProfile {
    const PREFIX: &'static str = "sp";
    type Create = ShippingProfileCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: ShippingProfileCreate) -> Result<Self, Self::Error> {
        check_non_empty("shipping profile name", &params.name)?;
        check_non_empty("shipping profile type", &params.profile_type)?;
        Ok(Self {
            id,
            name: params.name,
            profile_type: params.profile_type,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

// =============================================================================
// Fulfillment sets
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoZoneType {
    Country,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoZone {
    pub country_code: String,
    #[serde(rename = "type")]
    pub zone_type: GeoZoneType,
}

impl GeoZone {
    pub fn country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            zone_type: GeoZoneType::Country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceZone {
    pub id: RecordId,
    pub name: String,
    pub geo_zones: Vec<GeoZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceZoneCreate {
    pub name: String,
    pub geo_zones: Vec<GeoZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FulfillmentSet {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub service_zones: Vec<ServiceZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FulfillmentSetCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub service_zones: Vec<ServiceZoneCreate>,
}

#[async_trait]
impl HostRecord for FulfillmentSet {
    const PREFIX: &'static str = "fuset";
    type Create = FulfillmentSetCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    /// Service zones get ids derived from the set id: `fuset_2` owns `serzo_2_1`, ...
    fn from_create_params(id: RecordId, params: FulfillmentSetCreate) -> Result<Self, Self::Error> {
        check_non_empty("fulfillment set name", &params.name)?;
        let mut service_zones = Vec::with_capacity(params.service_zones.len());
        for (i, zone) in params.service_zones.into_iter().enumerate() {
            check_non_empty("service zone name", &zone.name)?;
            for geo in &zone.geo_zones {
                check_country_code(&geo.country_code)?;
            }
            service_zones.push(ServiceZone {
                id: id.child("serzo", i + 1),
                name: zone.name,
                geo_zones: zone.geo_zones,
            });
        }
        Ok(Self {
            id,
            name: params.name,
            set_type: params.set_type,
            service_zones,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

// =============================================================================
// Shipping options
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingOptionType {
    pub label: String,
    pub description: String,
    pub code: String,
}

/// A shipping price is keyed either by currency or by region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShippingOptionPrice {
    Currency { currency_code: String, amount: u64 },
    Region { region_id: RecordId, amount: u64 },
}

impl ShippingOptionPrice {
    pub fn currency(currency_code: impl Into<String>, amount: u64) -> Self {
        Self::Currency {
            currency_code: currency_code.into(),
            amount,
        }
    }

    pub fn region(region_id: RecordId, amount: u64) -> Self {
        Self::Region { region_id, amount }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Self::Currency { amount, .. } | Self::Region { amount, .. } => *amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Eq,
}

/// Eligibility rule. `value` is stored exactly as given, including embedded quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingOptionRule {
    pub attribute: String,
    pub value: String,
    pub operator: RuleOperator,
}

impl ShippingOptionRule {
    pub fn eq(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
            operator: RuleOperator::Eq,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingOption {
    pub id: RecordId,
    pub name: String,
    pub price_type: PriceType,
    pub provider_id: String,
    pub service_zone_id: RecordId,
    pub shipping_profile_id: RecordId,
    #[serde(rename = "type")]
    pub option_type: ShippingOptionType,
    pub prices: Vec<ShippingOptionPrice>,
    pub rules: Vec<ShippingOptionRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingOptionCreate {
    pub name: String,
    pub price_type: PriceType,
    pub provider_id: String,
    pub service_zone_id: RecordId,
    pub shipping_profile_id: RecordId,
    #[serde(rename = "type")]
    pub option_type: ShippingOptionType,
    pub prices: Vec<ShippingOptionPrice>,
    pub rules: Vec<ShippingOptionRule>,
}

#[async_trait]
impl HostRecord for ShippingOption {
    const PREFIX: &'static str = "so";
    type Create = ShippingOptionCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: ShippingOptionCreate) -> Result<Self, Self::Error> {
        check_non_empty("shipping option name", &params.name)?;
        check_non_empty("shipping option provider", &params.provider_id)?;
        if params.prices.is_empty() {
            return Err(ValidationError::Empty("flat shipping option prices"));
        }
        Ok(Self {
            id,
            name: params.name,
            price_type: params.price_type,
            provider_id: params.provider_id,
            service_zone_id: params.service_zone_id,
            shipping_profile_id: params.shipping_profile_id,
            option_type: params.option_type,
            prices: params.prices,
            rules: params.rules,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
