//! Static pricing reference data
//!
//! All monetary amounts are per liter in local currency unless noted.
//! Percentages are fractions (0.10 = 10%).

use crate::pricing::models::{Country, GridLocation, Tier};

/// Tier discount, indexed by tier 1..=14
const TIER_DISCOUNTS: [f64; 14] = [
    0.00, // tier 1
    0.02, // tier 2
    0.04, // tier 3
    0.06, // tier 4
    0.08, // tier 5
    0.10, // tier 6
    0.12, // tier 7
    0.14, // tier 8
    0.16, // tier 9
    0.18, // tier 10
    0.20, // tier 11
    0.22, // tier 12
    0.24, // tier 13
    0.26, // tier 14
];

/// Estimated purchase volume in liters, indexed by tier 1..=14
const VOLUME_ESTIMATES: [u32; 14] = [
    2500, 3200, 4000, 4800, 5600, 6878, 7500, 8200, 9000, 9800, 10500, 11200, 12000, 12800,
];

pub fn tier_discount_pct(tier: Tier) -> f64 {
    TIER_DISCOUNTS[tier.index()]
}

pub fn volume_estimate(tier: Tier) -> u32 {
    VOLUME_ESTIMATES[tier.index()]
}

/// Per-country rates for the fixed-amount model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCountryRates {
    pub wholesale_base: f64,
    pub retail_margin: f64,
    pub currency_risk_pct: f64,
    pub political_risk_pct: f64,
}

pub fn fixed_country_rates(country: Country) -> FixedCountryRates {
    match country {
        Country::SouthAfrica => FixedCountryRates {
            wholesale_base: 18.50,
            retail_margin: 3.00,
            currency_risk_pct: 0.02,
            political_risk_pct: 0.01,
        },
        Country::Zimbabwe => FixedCountryRates {
            wholesale_base: 19.20,
            retail_margin: 3.60,
            currency_risk_pct: 0.05,
            political_risk_pct: 0.08,
        },
        Country::Botswana => FixedCountryRates {
            wholesale_base: 18.80,
            retail_margin: 3.10,
            currency_risk_pct: 0.03,
            political_risk_pct: 0.02,
        },
    }
}

pub fn fixed_transport_cost(location: GridLocation) -> f64 {
    match location {
        GridLocation::Coastal => 0.25,
        GridLocation::Inland => 0.45,
    }
}

/// Crude oil benchmark, USD per barrel
pub const CRUDE_OIL_PRICE_USD: f64 = 82.45;

pub const LITERS_PER_BARREL: f64 = 159.0;

/// Per-country rates for the percentage model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicCountryRates {
    /// Local currency units per USD
    pub exchange_rate: f64,
    pub fuel_levy_pct: f64,
    pub wholesale_margin_pct: f64,
    pub retail_margin_pct: f64,
    pub currency_risk_pct: f64,
    pub political_risk_pct: f64,
}

pub fn dynamic_country_rates(country: Country) -> DynamicCountryRates {
    match country {
        Country::SouthAfrica => DynamicCountryRates {
            exchange_rate: 17.25,
            fuel_levy_pct: 0.058,
            wholesale_margin_pct: 0.162,
            retail_margin_pct: 0.140,
            currency_risk_pct: 0.024,
            political_risk_pct: 0.013,
        },
        Country::Zimbabwe => DynamicCountryRates {
            exchange_rate: 322.0,
            fuel_levy_pct: 0.087,
            wholesale_margin_pct: 0.187,
            retail_margin_pct: 0.158,
            currency_risk_pct: 0.052,
            political_risk_pct: 0.078,
        },
        Country::Botswana => DynamicCountryRates {
            exchange_rate: 11.50,
            fuel_levy_pct: 0.045,
            wholesale_margin_pct: 0.165,
            retail_margin_pct: 0.142,
            currency_risk_pct: 0.031,
            political_risk_pct: 0.019,
        },
    }
}

pub fn dynamic_transport_pct(location: GridLocation) -> f64 {
    match location {
        GridLocation::Coastal => 0.012,
        GridLocation::Inland => 0.021,
    }
}
