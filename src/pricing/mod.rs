pub mod calculator;
pub mod dynamic;
pub mod models;
pub mod tables;

pub use calculator::{FixedPricing, PricingStrategy};
pub use dynamic::DynamicPricing;
pub use models::{
    round2, ComponentOp, Country, GridLocation, MarketSnapshot, PriceBreakdown, PriceComponent,
    PriceRequest, StrategyKind, Tier,
};

/// Get the strategy implementation for a kind
pub fn strategy_for(kind: StrategyKind) -> Box<dyn PricingStrategy> {
    match kind {
        StrategyKind::Fixed => Box::new(FixedPricing),
        StrategyKind::Dynamic => Box::new(DynamicPricing),
    }
}
