//! Regions and tax regions.

use super::error::{check_country_code, check_currency_code, check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: RecordId,
    pub name: String,
    pub currency_code: String,
    pub countries: Vec<String>,
    pub payment_providers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCreate {
    pub name: String,
    pub currency_code: String,
    pub countries: Vec<String>,
    pub payment_providers: Vec<String>,
}

#[async_trait]
impl HostRecord for Region {
    const PREFIX: &'static str = "reg";
    type Create = RegionCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: RegionCreate) -> Result<Self, Self::Error> {
        check_non_empty("region name", &params.name)?;
        check_currency_code(&params.currency_code)?;
        for country in &params.countries {
            check_country_code(country)?;
        }
        Ok(Self {
            id,
            name: params.name,
            currency_code: params.currency_code,
            countries: params.countries,
            payment_providers: params.payment_providers,
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

/// One tax region per country; no rates are seeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxRegion {
    pub id: RecordId,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxRegionCreate {
    pub country_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct TaxRegionFilter {
    pub country_code: Option<String>,
}

#[async_trait]
impl HostRecord for TaxRegion {
    const PREFIX: &'static str = "txreg";
    type Create = TaxRegionCreate;
    type Update = Infallible;
    type Filter = TaxRegionFilter;
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: TaxRegionCreate) -> Result<Self, Self::Error> {
        check_country_code(&params.country_code)?;
        Ok(Self {
            id,
            country_code: params.country_code,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, filter: &TaxRegionFilter) -> bool {
        filter
            .country_code
            .as_ref()
            .map_or(true, |code| self.country_code.eq_ignore_ascii_case(code))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rejects_bad_country() {
        let err = Region::from_create_params(
            RecordId::new("reg", 1),
            RegionCreate {
                name: "Europe".into(),
                currency_code: "eur".into(),
                countries: vec!["gb".into(), "deu".into()],
                payment_providers: vec![],
            },
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCountryCode("deu".into()));
    }

    #[test]
    fn test_region_rejects_uppercase_currency() {
        let err = Region::from_create_params(
            RecordId::new("reg", 1),
            RegionCreate {
                name: "Europe".into(),
                currency_code: "EUR".into(),
                countries: vec![],
                payment_providers: vec![],
            },
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCurrencyCode(_)));
    }

    #[test]
    fn test_tax_region_filter_ignores_case() {
        let region = TaxRegion::from_create_params(
            RecordId::new("txreg", 1),
            TaxRegionCreate {
                country_code: "dk".into(),
            },
        )
        .unwrap();
        assert!(region.matches(&TaxRegionFilter {
            country_code: Some("DK".into())
        }));
        assert!(!region.matches(&TaxRegionFilter {
            country_code: Some("se".into())
        }));
    }
}
