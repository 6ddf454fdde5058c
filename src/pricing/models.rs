use crate::error::{KeyKind, PricingError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Customer loyalty tier, always within 1..=14
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 14;

    /// Validate a raw tier number
    pub fn new(value: u32) -> Result<Self, PricingError> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PricingError::invalid_key(KeyKind::Tier, value.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based position in the per-tier tables
    pub(crate) fn index(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// Every tier in ascending order
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN..=Self::MAX).map(Tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| PricingError::invalid_key(KeyKind::Tier, s))
            .and_then(Tier::new)
    }
}

/// Supported markets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    SouthAfrica,
    Zimbabwe,
    Botswana,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::SouthAfrica, Country::Zimbabwe, Country::Botswana];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SouthAfrica => "south-africa",
            Self::Zimbabwe => "zimbabwe",
            Self::Botswana => "botswana",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| PricingError::invalid_key(KeyKind::Country, s))
    }
}

/// Delivery context affecting transport cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLocation {
    Coastal,
    Inland,
}

impl GridLocation {
    pub const ALL: [GridLocation; 2] = [GridLocation::Coastal, GridLocation::Inland];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coastal => "coastal",
            Self::Inland => "inland",
        }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridLocation {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| PricingError::invalid_key(KeyKind::GridLocation, s))
    }
}

/// Validated pricing inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRequest {
    pub tier: Tier,
    pub country: Country,
    pub grid_location: GridLocation,
}

impl PriceRequest {
    pub fn new(tier: Tier, country: Country, grid_location: GridLocation) -> Self {
        Self {
            tier,
            country,
            grid_location,
        }
    }

    /// Validate raw inputs, failing on the first key outside the supported set
    pub fn parse(tier: u32, country: &str, grid_location: &str) -> Result<Self, PricingError> {
        Ok(Self {
            tier: Tier::new(tier)?,
            country: country.parse()?,
            grid_location: grid_location.parse()?,
        })
    }

    /// Every valid combination of tier, country and grid location
    pub fn all() -> impl Iterator<Item = PriceRequest> {
        Tier::all().flat_map(|tier| {
            Country::ALL.into_iter().flat_map(move |country| {
                GridLocation::ALL
                    .into_iter()
                    .map(move |location| PriceRequest::new(tier, country, location))
            })
        })
    }
}

/// Which pricing pipeline produced a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Fixed,
    Dynamic,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(format!(
                "unknown pricing strategy '{}' (expected fixed or dynamic)",
                other
            )),
        }
    }
}

/// How a component line moves the running per-liter price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentOp {
    /// Starting amount of the pipeline
    Base,
    Add,
    Subtract,
    /// Running total after the preceding lines
    Subtotal,
}

/// One line of a price breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceComponent {
    pub label: &'static str,
    pub op: ComponentOp,
    pub per_liter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PriceComponent {
    pub fn new(label: &'static str, op: ComponentOp, per_liter: f64) -> Self {
        Self {
            label,
            op,
            per_liter,
            pct: None,
            note: None,
        }
    }

    pub fn with_pct(mut self, pct: f64) -> Self {
        self.pct = Some(pct);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Per-liter price breakdown for one request
///
/// All amounts are kept at full precision; call [`PriceBreakdown::rounded`]
/// for a presentation copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub strategy: StrategyKind,
    pub tier: Tier,
    pub country: Country,
    pub grid_location: GridLocation,
    /// Pipeline lines in evaluation order
    pub components: Vec<PriceComponent>,
    pub wholesale_per_liter: f64,
    pub base_retail_per_liter: f64,
    pub tier_discount_pct: f64,
    pub tier_discount_per_liter: f64,
    pub after_discount_per_liter: f64,
    pub transport_per_liter: f64,
    pub after_transport_per_liter: f64,
    pub currency_risk_pct: f64,
    pub currency_risk_per_liter: f64,
    pub political_risk_pct: f64,
    pub political_risk_per_liter: f64,
    pub final_per_liter: f64,
    pub estimated_volume: u32,
    pub total_cost: f64,
    /// Market inputs, present for the dynamic strategy only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSnapshot>,
}

/// Crude oil and exchange rate inputs behind a dynamic base cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub crude_price_usd: f64,
    pub liters_per_barrel: f64,
    pub crude_cost_usd_per_liter: f64,
    pub exchange_rate: f64,
}

impl PriceBreakdown {
    /// Copy with every monetary amount rounded to 2 decimals.
    /// Percentages are left untouched.
    pub fn rounded(&self) -> Self {
        Self {
            components: self
                .components
                .iter()
                .map(|c| PriceComponent {
                    per_liter: round2(c.per_liter),
                    ..c.clone()
                })
                .collect(),
            wholesale_per_liter: round2(self.wholesale_per_liter),
            base_retail_per_liter: round2(self.base_retail_per_liter),
            tier_discount_per_liter: round2(self.tier_discount_per_liter),
            after_discount_per_liter: round2(self.after_discount_per_liter),
            transport_per_liter: round2(self.transport_per_liter),
            after_transport_per_liter: round2(self.after_transport_per_liter),
            currency_risk_per_liter: round2(self.currency_risk_per_liter),
            political_risk_per_liter: round2(self.political_risk_per_liter),
            final_per_liter: round2(self.final_per_liter),
            total_cost: round2(self.total_cost),
            ..self.clone()
        }
    }
}

/// Round to 2 decimal places using the exact binary value, so the result
/// always agrees with `{:.2}` formatting
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
