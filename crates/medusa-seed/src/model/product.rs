//! Product categories and products.
//!
//! A [`Product`] is created against the category table: its actor receives a
//! `RecordClient<ProductCategory>` as context and rejects unknown category ids in
//! `on_create`.

use super::error::{check_currency_code, check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordClient, RecordId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::convert::Infallible;

// =============================================================================
// Categories
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCategory {
    pub id: RecordId,
    pub name: String,
    pub handle: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCategoryCreate {
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProductCategoryFilter {
    pub name: Option<String>,
}

/// "Summer Tees" -> "summer-tees"
pub fn handleize(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[async_trait]
impl HostRecord for ProductCategory {
    const PREFIX: &'static str = "pcat";
    type Create = ProductCategoryCreate;
    type Update = Infallible;
    type Filter = ProductCategoryFilter;
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: ProductCategoryCreate) -> Result<Self, Self::Error> {
        check_non_empty("category name", &params.name)?;
        Ok(Self {
            id,
            handle: handleize(&params.name),
            name: params.name,
            is_active: params.is_active,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, filter: &ProductCategoryFilter) -> bool {
        filter.name.as_ref().map_or(true, |name| &self.name == name)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    Proposed,
    Published,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyAmount {
    pub amount: u64,
    pub currency_code: String,
}

impl MoneyAmount {
    pub fn new(amount: u64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVariantCreate {
    pub title: String,
    pub sku: String,
    /// Option title -> chosen value.
    pub options: BTreeMap<String, String>,
    pub manage_inventory: bool,
    pub prices: Vec<MoneyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVariant {
    pub id: RecordId,
    pub title: String,
    pub sku: String,
    pub options: BTreeMap<String, String>,
    pub manage_inventory: bool,
    pub prices: Vec<MoneyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreate {
    pub title: String,
    pub category_ids: Vec<RecordId>,
    pub description: String,
    pub handle: String,
    pub weight: u32,
    pub status: ProductStatus,
    pub images: Vec<ProductImage>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<ProductVariantCreate>,
    pub sales_channel_ids: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    pub handle: String,
    pub description: String,
    pub weight: u32,
    pub status: ProductStatus,
    pub category_ids: Vec<RecordId>,
    pub images: Vec<ProductImage>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<ProductVariant>,
    pub sales_channel_ids: Vec<RecordId>,
}

/// Every value a variant picks must be a declared value of a declared option.
fn check_variant_options(
    options: &[ProductOption],
    variant: &ProductVariantCreate,
) -> Result<(), ValidationError> {
    for (title, value) in &variant.options {
        let declared = options
            .iter()
            .find(|o| &o.title == title)
            .is_some_and(|o| o.values.contains(value));
        if !declared {
            return Err(ValidationError::UndeclaredOptionValue {
                variant: variant.title.clone(),
                option: title.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl HostRecord for Product {
    const PREFIX: &'static str = "prod";
    type Create = ProductCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = RecordClient<ProductCategory>;
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: ProductCreate) -> Result<Self, Self::Error> {
        check_non_empty("product title", &params.title)?;
        check_non_empty("product handle", &params.handle)?;

        let mut variants = Vec::with_capacity(params.variants.len());
        for (i, variant) in params.variants.into_iter().enumerate() {
            check_non_empty("variant sku", &variant.sku)?;
            check_variant_options(&params.options, &variant)?;
            for price in &variant.prices {
                check_currency_code(&price.currency_code)?;
            }
            variants.push(ProductVariant {
                id: id.child("variant", i + 1),
                title: variant.title,
                sku: variant.sku,
                options: variant.options,
                manage_inventory: variant.manage_inventory,
                prices: variant.prices,
            });
        }

        Ok(Self {
            id,
            title: params.title,
            handle: params.handle,
            description: params.description,
            weight: params.weight,
            status: params.status,
            category_ids: params.category_ids,
            images: params.images,
            options: params.options,
            variants,
            sales_channel_ids: params.sales_channel_ids,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_create(&mut self, categories: &RecordClient<ProductCategory>) -> Result<(), Self::Error> {
        for category_id in &self.category_ids {
            let found = categories
                .get(category_id.clone())
                .await
                .map_err(|e| ValidationError::Lookup(e.to_string()))?;
            if found.is_none() {
                return Err(ValidationError::UnknownCategory(category_id.clone()));
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerce_host::mock::MockClient;

    fn tee(category_ids: Vec<RecordId>, color: &str) -> ProductCreate {
        ProductCreate {
            title: "Tee".into(),
            category_ids,
            description: String::new(),
            handle: "tee".into(),
            weight: 400,
            status: ProductStatus::Published,
            images: vec![],
            options: vec![ProductOption {
                title: "Color".into(),
                values: vec!["Black".into(), "White".into()],
            }],
            variants: vec![ProductVariantCreate {
                title: color.into(),
                sku: format!("TEE-{}", color.to_uppercase()),
                options: BTreeMap::from([("Color".to_string(), color.to_string())]),
                manage_inventory: false,
                prices: vec![MoneyAmount::new(10, "eur")],
            }],
            sales_channel_ids: vec![],
        }
    }

    #[test]
    fn test_handleize() {
        assert_eq!(handleize("Shirts"), "shirts");
        assert_eq!(handleize("Summer  Tees & Tops"), "summer-tees-tops");
    }

    #[test]
    fn test_variant_ids_and_undeclared_values() {
        let product = Product::from_create_params(RecordId::new("prod", 1), tee(vec![], "Black")).unwrap();
        assert_eq!(product.variants[0].id.as_str(), "variant_1_1");

        let err = Product::from_create_params(RecordId::new("prod", 2), tee(vec![], "Red")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UndeclaredOptionValue { ref value, .. } if value == "Red"
        ));
    }

    #[tokio::test]
    async fn test_on_create_checks_categories() {
        let mut categories = MockClient::<ProductCategory>::new();
        categories.expect_get().return_ok(None);

        let mut product =
            Product::from_create_params(RecordId::new("prod", 1), tee(vec![RecordId::from("pcat_9")], "White"))
                .unwrap();
        let err = product.on_create(&categories.client()).await.unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory(RecordId::from("pcat_9")));
        categories.verify();
    }
}
