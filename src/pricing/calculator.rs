use crate::error::PricingError;
use crate::pricing::models::{
    ComponentOp, PriceBreakdown, PriceComponent, PriceRequest, StrategyKind,
};
use crate::pricing::tables;
use tracing::debug;

/// A pricing pipeline turning validated inputs into a per-liter breakdown
pub trait PricingStrategy {
    /// Strategy identifier recorded in every breakdown
    fn kind(&self) -> StrategyKind;

    /// Compute the breakdown for already validated inputs
    fn compute(&self, request: &PriceRequest) -> PriceBreakdown;

    /// Validate raw inputs and compute the breakdown.
    /// Unknown keys fail with [`PricingError::InvalidKey`].
    fn quote(
        &self,
        tier: u32,
        country: &str,
        grid_location: &str,
    ) -> Result<PriceBreakdown, PricingError> {
        let request = PriceRequest::parse(tier, country, grid_location)?;
        Ok(self.compute(&request))
    }
}

/// Fixed-amount pipeline: wholesale, margin and transport are constants
/// per liter, discount and risk premiums are percentages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPricing;

impl PricingStrategy for FixedPricing {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Fixed
    }

    fn compute(&self, request: &PriceRequest) -> PriceBreakdown {
        let rates = tables::fixed_country_rates(request.country);

        let wholesale = rates.wholesale_base;
        let base_retail = wholesale + rates.retail_margin;

        let tier_discount_pct = tables::tier_discount_pct(request.tier);
        let tier_discount = base_retail * tier_discount_pct;
        let after_discount = base_retail - tier_discount;

        let transport = tables::fixed_transport_cost(request.grid_location);
        let after_transport = after_discount + transport;

        let risk = apply_risk(after_transport, rates.currency_risk_pct, rates.political_risk_pct);

        let mut components = vec![
            PriceComponent::new("Wholesale Price", ComponentOp::Base, wholesale),
            PriceComponent::new("Retail Margin", ComponentOp::Add, rates.retail_margin),
            PriceComponent::new("Base Retail", ComponentOp::Subtotal, base_retail),
            PriceComponent::new("Tier Discount", ComponentOp::Subtract, tier_discount)
                .with_pct(tier_discount_pct),
            PriceComponent::new("After Discount", ComponentOp::Subtotal, after_discount),
            PriceComponent::new("Transport Cost", ComponentOp::Add, transport),
            PriceComponent::new("After Transport", ComponentOp::Subtotal, after_transport),
        ];
        risk.push_components(&mut components);

        let breakdown = finish(
            self.kind(),
            request,
            components,
            PipelineTotals {
                wholesale,
                base_retail,
                tier_discount_pct,
                tier_discount,
                after_discount,
                transport,
                after_transport,
            },
            risk,
        );

        debug!(
            "Fixed price for tier {} / {} / {}: {:.4} per liter",
            request.tier, request.country, request.grid_location, breakdown.final_per_liter
        );
        breakdown
    }
}

/// Running totals up to and including transport
pub(crate) struct PipelineTotals {
    pub wholesale: f64,
    pub base_retail: f64,
    pub tier_discount_pct: f64,
    pub tier_discount: f64,
    pub after_discount: f64,
    pub transport: f64,
    pub after_transport: f64,
}

/// Currency and political premiums, both taken on the after-transport price
pub(crate) struct RiskApplied {
    pub currency_pct: f64,
    pub currency: f64,
    pub political_pct: f64,
    pub political: f64,
    pub final_per_liter: f64,
}

impl RiskApplied {
    pub fn push_components(&self, components: &mut Vec<PriceComponent>) {
        components.push(
            PriceComponent::new("Currency Risk", ComponentOp::Add, self.currency)
                .with_pct(self.currency_pct),
        );
        components.push(
            PriceComponent::new("Political Risk", ComponentOp::Add, self.political)
                .with_pct(self.political_pct),
        );
    }
}

pub(crate) fn apply_risk(after_transport: f64, currency_pct: f64, political_pct: f64) -> RiskApplied {
    let currency = after_transport * currency_pct;
    let political = after_transport * political_pct;
    RiskApplied {
        currency_pct,
        currency,
        political_pct,
        political,
        final_per_liter: after_transport + currency + political,
    }
}

/// Scale the final per-liter price by the tier's volume and assemble the record
pub(crate) fn finish(
    strategy: StrategyKind,
    request: &PriceRequest,
    components: Vec<PriceComponent>,
    totals: PipelineTotals,
    risk: RiskApplied,
) -> PriceBreakdown {
    let estimated_volume = tables::volume_estimate(request.tier);

    PriceBreakdown {
        strategy,
        tier: request.tier,
        country: request.country,
        grid_location: request.grid_location,
        components,
        wholesale_per_liter: totals.wholesale,
        base_retail_per_liter: totals.base_retail,
        tier_discount_pct: totals.tier_discount_pct,
        tier_discount_per_liter: totals.tier_discount,
        after_discount_per_liter: totals.after_discount,
        transport_per_liter: totals.transport,
        after_transport_per_liter: totals.after_transport,
        currency_risk_pct: risk.currency_pct,
        currency_risk_per_liter: risk.currency,
        political_risk_pct: risk.political_pct,
        political_risk_per_liter: risk.political,
        final_per_liter: risk.final_per_liter,
        estimated_volume,
        total_cost: risk.final_per_liter * estimated_volume as f64,
        market: None,
    }
}
