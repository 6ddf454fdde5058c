use crate::pricing::calculator::{apply_risk, finish, PipelineTotals, PricingStrategy};
use crate::pricing::models::{
    ComponentOp, MarketSnapshot, PriceBreakdown, PriceComponent, PriceRequest, StrategyKind,
};
use crate::pricing::tables;
use tracing::debug;

/// Percentage pipeline: base cost comes from the crude oil benchmark and the
/// country's exchange rate, then levy, wholesale margin, retail margin and
/// transport are each a percentage of the running subtotal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicPricing;

impl PricingStrategy for DynamicPricing {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dynamic
    }

    fn compute(&self, request: &PriceRequest) -> PriceBreakdown {
        let rates = tables::dynamic_country_rates(request.country);

        let crude_cost_usd = tables::CRUDE_OIL_PRICE_USD / tables::LITERS_PER_BARREL;
        let base_cost = crude_cost_usd * rates.exchange_rate;

        let fuel_levy = base_cost * rates.fuel_levy_pct;
        let after_levy = base_cost + fuel_levy;

        let wholesale_margin = after_levy * rates.wholesale_margin_pct;
        let wholesale = after_levy + wholesale_margin;

        let retail_margin = wholesale * rates.retail_margin_pct;
        let base_retail = wholesale + retail_margin;

        let tier_discount_pct = tables::tier_discount_pct(request.tier);
        let tier_discount = base_retail * tier_discount_pct;
        let after_discount = base_retail - tier_discount;

        let transport_pct = tables::dynamic_transport_pct(request.grid_location);
        let transport = after_discount * transport_pct;
        let after_transport = after_discount + transport;

        let risk = apply_risk(after_transport, rates.currency_risk_pct, rates.political_risk_pct);

        let mut components = vec![
            PriceComponent::new("Crude Cost", ComponentOp::Base, base_cost).with_note(format!(
                "${:.3}/L x {:.2}",
                crude_cost_usd, rates.exchange_rate
            )),
            PriceComponent::new("Fuel Levy", ComponentOp::Add, fuel_levy)
                .with_pct(rates.fuel_levy_pct)
                .with_note("government levy"),
            PriceComponent::new("After Levy", ComponentOp::Subtotal, after_levy),
            PriceComponent::new("Wholesale Margin", ComponentOp::Add, wholesale_margin)
                .with_pct(rates.wholesale_margin_pct)
                .with_note("of cost after levy"),
            PriceComponent::new("Wholesale Price", ComponentOp::Subtotal, wholesale),
            PriceComponent::new("Retail Margin", ComponentOp::Add, retail_margin)
                .with_pct(rates.retail_margin_pct)
                .with_note("of wholesale price"),
            PriceComponent::new("Base Retail", ComponentOp::Subtotal, base_retail),
            PriceComponent::new("Tier Discount", ComponentOp::Subtract, tier_discount)
                .with_pct(tier_discount_pct)
                .with_note("loyalty discount"),
            PriceComponent::new("After Discount", ComponentOp::Subtotal, after_discount),
            PriceComponent::new("Transport Cost", ComponentOp::Add, transport)
                .with_pct(transport_pct)
                .with_note("of discounted price"),
            PriceComponent::new("After Transport", ComponentOp::Subtotal, after_transport),
        ];
        risk.push_components(&mut components);

        let mut breakdown = finish(
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
        breakdown.market = Some(MarketSnapshot {
            crude_price_usd: tables::CRUDE_OIL_PRICE_USD,
            liters_per_barrel: tables::LITERS_PER_BARREL,
            crude_cost_usd_per_liter: crude_cost_usd,
            exchange_rate: rates.exchange_rate,
        });

        debug!(
            "Dynamic price for tier {} / {} / {}: base {:.4}, final {:.4} per liter",
            request.tier,
            request.country,
            request.grid_location,
            base_cost,
            breakdown.final_per_liter
        );
        breakdown
    }
}
