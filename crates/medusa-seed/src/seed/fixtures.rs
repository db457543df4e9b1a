//! The demo store's literal data.

use super::catalog::CategoryIndex;
use crate::error::SeedError;
use crate::model::{
    ApiKeyCreate, ApiKeyType, FulfillmentSetCreate, GeoZone, MoneyAmount, PriceType, ProductCategoryCreate,
    ProductCreate, ProductImage, ProductOption, ProductStatus, ProductVariantCreate, RegionCreate,
    SalesChannelCreate, ServiceZoneCreate, ShippingOptionCreate, ShippingOptionPrice, ShippingOptionRule,
    ShippingOptionType, ShippingProfileCreate, StockLocationAddress, StockLocationCreate, StoreCurrency,
    StoreUpdate, TaxRegionCreate,
};
use commerce_host::RecordId;
use std::collections::BTreeMap;

/// Countries of the "Europe" region, in seeding order.
pub const COUNTRIES: [&str; 7] = ["gb", "de", "dk", "se", "fr", "es", "it"];

pub const DEFAULT_SALES_CHANNEL: &str = "Default Sales Channel";
pub const FULFILLMENT_PROVIDER: &str = "manual_manual";
pub const PAYMENT_PROVIDER: &str = "pp_system_default";

const IMAGE_HOST: &str = "https://medusa-public-images.s3.eu-west-1.amazonaws.com";
const SIZES: [&str; 4] = ["S", "M", "L", "XL"];
const COLORS: [&str; 2] = ["Black", "White"];

pub fn default_sales_channel() -> SalesChannelCreate {
    SalesChannelCreate::named(DEFAULT_SALES_CHANNEL)
}

/// `eur` (default) and `usd`, plus the default sales channel.
pub fn store_update(sales_channel_id: RecordId) -> StoreUpdate {
    StoreUpdate {
        supported_currencies: Some(vec![
            StoreCurrency::default_currency("eur"),
            StoreCurrency::new("usd"),
        ]),
        default_sales_channel_id: Some(sales_channel_id),
    }
}

pub fn europe() -> RegionCreate {
    RegionCreate {
        name: "Europe".into(),
        currency_code: "eur".into(),
        countries: COUNTRIES.iter().map(|c| c.to_string()).collect(),
        payment_providers: vec![PAYMENT_PROVIDER.into()],
    }
}

pub fn tax_regions() -> Vec<TaxRegionCreate> {
    COUNTRIES
        .iter()
        .map(|country_code| TaxRegionCreate {
            country_code: country_code.to_string(),
        })
        .collect()
}

pub fn european_warehouse() -> StockLocationCreate {
    StockLocationCreate {
        name: "European Warehouse".into(),
        address: StockLocationAddress {
            city: "Copenhagen".into(),
            country_code: "DK".into(),
            address_1: String::new(),
        },
    }
}

pub fn default_shipping_profile() -> ShippingProfileCreate {
    ShippingProfileCreate {
        name: "Default".into(),
        profile_type: "default".into(),
    }
}

pub fn european_delivery() -> FulfillmentSetCreate {
    FulfillmentSetCreate {
        name: "European Warehouse delivery".into(),
        set_type: "shipping".into(),
        service_zones: vec![ServiceZoneCreate {
            name: "Europe".into(),
            geo_zones: COUNTRIES.iter().map(|c| GeoZone::country(*c)).collect(),
        }],
    }
}

fn shipping_option(
    name: &str,
    label: &str,
    description: &str,
    code: &str,
    service_zone_id: &RecordId,
    shipping_profile_id: &RecordId,
    region_id: &RecordId,
) -> ShippingOptionCreate {
    ShippingOptionCreate {
        name: name.into(),
        price_type: PriceType::Flat,
        provider_id: FULFILLMENT_PROVIDER.into(),
        service_zone_id: service_zone_id.clone(),
        shipping_profile_id: shipping_profile_id.clone(),
        option_type: ShippingOptionType {
            label: label.into(),
            description: description.into(),
            code: code.into(),
        },
        prices: vec![
            ShippingOptionPrice::currency("usd", 10),
            ShippingOptionPrice::currency("eur", 10),
            ShippingOptionPrice::region(region_id.clone(), 10),
        ],
        rules: vec![
            // the store-enabled flag is compared as a JSON string
            ShippingOptionRule::eq("enabled_in_store", "\"true\""),
            ShippingOptionRule::eq("is_return", "false"),
        ],
    }
}

/// "Standard Shipping" and "Express Shipping".
pub fn shipping_options(
    service_zone_id: &RecordId,
    shipping_profile_id: &RecordId,
    region_id: &RecordId,
) -> Vec<ShippingOptionCreate> {
    vec![
        shipping_option(
            "Standard Shipping",
            "Standard",
            "Ship in 2-3 days.",
            "standard",
            service_zone_id,
            shipping_profile_id,
            region_id,
        ),
        shipping_option(
            "Express Shipping",
            "Express",
            "Ship in 24 hours.",
            "express",
            service_zone_id,
            shipping_profile_id,
            region_id,
        ),
    ]
}

pub fn webshop_key() -> ApiKeyCreate {
    ApiKeyCreate {
        title: "Webshop".into(),
        key_type: ApiKeyType::Publishable,
        created_by: String::new(),
    }
}

pub const CATEGORIES: [&str; 4] = ["Shirts", "Sweatshirts", "Pants", "Merch"];

pub fn categories() -> Vec<ProductCategoryCreate> {
    CATEGORIES
        .iter()
        .map(|name| ProductCategoryCreate {
            name: name.to_string(),
            is_active: true,
        })
        .collect()
}

/// One catalog entry. Products with `colors` get a variant per size and color.
struct ProductFixture {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    handle: &'static str,
    sku_prefix: &'static str,
    images: &'static [&'static str],
    colors: bool,
}

static PRODUCTS: [ProductFixture; 4] = [
    ProductFixture {
        title: "Medusa T-Shirt",
        category: "Shirts",
        description: "Reimagine the feeling of a classic T-shirt. With our cotton T-shirts, everyday essentials no longer have to be ordinary.",
        handle: "t-shirt",
        sku_prefix: "SHIRT",
        images: &[
            "tee-black-front.png",
            "tee-black-back.png",
            "tee-white-front.png",
            "tee-white-back.png",
        ],
        colors: true,
    },
    ProductFixture {
        title: "Medusa Sweatshirt",
        category: "Sweatshirts",
        description: "Reimagine the feeling of a classic sweatshirt. With our cotton sweatshirt, everyday essentials no longer have to be ordinary.",
        handle: "sweatshirt",
        sku_prefix: "SWEATSHIRT",
        images: &["sweatshirt-vintage-front.png", "sweatshirt-vintage-back.png"],
        colors: false,
    },
    ProductFixture {
        title: "Medusa Sweatpants",
        category: "Pants",
        description: "Reimagine the feeling of classic sweatpants. With our cotton sweatpants, everyday essentials no longer have to be ordinary.",
        handle: "sweatpants",
        sku_prefix: "SWEATPANTS",
        images: &["sweatpants-gray-front.png", "sweatpants-gray-back.png"],
        colors: false,
    },
    ProductFixture {
        title: "Medusa Shorts",
        category: "Merch",
        description: "Reimagine the feeling of classic shorts. With our cotton shorts, everyday essentials no longer have to be ordinary.",
        handle: "shorts",
        sku_prefix: "SHORTS",
        images: &["shorts-vintage-front.png", "shorts-vintage-back.png"],
        colors: false,
    },
];

fn variant_prices() -> Vec<MoneyAmount> {
    vec![MoneyAmount::new(10, "eur"), MoneyAmount::new(15, "usd")]
}

fn variant(title: String, sku: String, options: BTreeMap<String, String>) -> ProductVariantCreate {
    ProductVariantCreate {
        title,
        sku,
        options,
        manage_inventory: false,
        prices: variant_prices(),
    }
}

impl ProductFixture {
    fn options(&self) -> Vec<ProductOption> {
        let mut options = vec![ProductOption {
            title: "Size".into(),
            values: SIZES.iter().map(|s| s.to_string()).collect(),
        }];
        if self.colors {
            options.push(ProductOption {
                title: "Color".into(),
                values: COLORS.iter().map(|c| c.to_string()).collect(),
            });
        }
        options
    }

    /// Sizes outermost: S / Black, S / White, M / Black, ...
    fn variants(&self) -> Vec<ProductVariantCreate> {
        let mut variants = Vec::new();
        for size in SIZES {
            if !self.colors {
                variants.push(variant(
                    size.to_string(),
                    format!("{}-{}", self.sku_prefix, size),
                    BTreeMap::from([("Size".to_string(), size.to_string())]),
                ));
                continue;
            }
            for color in COLORS {
                variants.push(variant(
                    format!("{} / {}", size, color),
                    format!("{}-{}-{}", self.sku_prefix, size, color.to_uppercase()),
                    BTreeMap::from([
                        ("Size".to_string(), size.to_string()),
                        ("Color".to_string(), color.to_string()),
                    ]),
                ));
            }
        }
        variants
    }

    fn to_create(&self, category_id: RecordId, sales_channel_id: &RecordId) -> ProductCreate {
        ProductCreate {
            title: self.title.into(),
            category_ids: vec![category_id],
            description: self.description.into(),
            handle: self.handle.into(),
            weight: 400,
            status: ProductStatus::Published,
            images: self
                .images
                .iter()
                .map(|file| ProductImage {
                    url: format!("{}/{}", IMAGE_HOST, file),
                })
                .collect(),
            options: self.options(),
            variants: self.variants(),
            sales_channel_ids: vec![sales_channel_id.clone()],
        }
    }
}

/// Product payloads in creation order, each with its category resolved by name.
///
/// Payloads are built lazily so a missing category only stops the products after it.
pub fn products<'a>(
    categories: &'a CategoryIndex,
    sales_channel_id: &'a RecordId,
) -> impl Iterator<Item = Result<ProductCreate, SeedError>> + 'a {
    PRODUCTS.iter().map(move |fixture| {
        let category_id = categories.id(fixture.category)?.clone();
        Ok(fixture.to_create(category_id, sales_channel_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCategory;

    fn index() -> CategoryIndex {
        let created: Vec<ProductCategory> = CATEGORIES
            .iter()
            .zip(1..)
            .map(|(name, seq)| ProductCategory {
                id: RecordId::new("pcat", seq),
                name: name.to_string(),
                handle: name.to_lowercase(),
                is_active: true,
            })
            .collect();
        CategoryIndex::new(&created)
    }

    #[test]
    fn test_tshirt_has_eight_variants_in_size_major_order() {
        let index = index();
        let channel = RecordId::from("sc_1");
        let tee = products(&index, &channel).next().unwrap().unwrap();

        let titles: Vec<&str> = tee.variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "S / Black",
                "S / White",
                "M / Black",
                "M / White",
                "L / Black",
                "L / White",
                "XL / Black",
                "XL / White",
            ]
        );
        assert_eq!(tee.variants[7].sku, "SHIRT-XL-WHITE");
        assert_eq!(tee.category_ids, vec![RecordId::new("pcat", 1)]);
        assert_eq!(tee.images[0].url, "https://medusa-public-images.s3.eu-west-1.amazonaws.com/tee-black-front.png");
    }

    #[test]
    fn test_size_only_products() {
        let index = index();
        let channel = RecordId::from("sc_1");
        let rest: Vec<ProductCreate> = products(&index, &channel).skip(1).map(Result::unwrap).collect();

        let handles: Vec<&str> = rest.iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(handles, vec!["sweatshirt", "sweatpants", "shorts"]);
        for product in &rest {
            assert_eq!(product.variants.len(), 4);
            assert_eq!(product.options.len(), 1);
            assert!(product.variants.iter().all(|v| v.prices == variant_prices() && !v.manage_inventory));
        }
        assert_eq!(rest[1].variants[3].sku, "SWEATPANTS-XL");
        assert_eq!(rest[2].category_ids, vec![RecordId::new("pcat", 4)]);
    }

    #[test]
    fn test_shipping_option_prices_and_rules() {
        let options = shipping_options(
            &RecordId::from("serzo_1_1"),
            &RecordId::from("sp_1"),
            &RecordId::from("reg_1"),
        );
        assert_eq!(options.len(), 2);
        for option in &options {
            assert_eq!(option.prices.len(), 3);
            assert_eq!(option.prices[2], ShippingOptionPrice::region(RecordId::from("reg_1"), 10));
            assert_eq!(option.rules[0].value, "\"true\"");
        }
        assert_eq!(options[1].option_type.code, "express");
    }
}
