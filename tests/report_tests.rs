/// Integration tests for breakdown and comparison rendering
use fuel_pricing::{
    pricing::{
        round2, strategy_for, DynamicPricing, FixedPricing, PriceRequest, PricingStrategy,
        StrategyKind,
    },
    report::{format_amount, format_breakdown, format_comparison, ReportOptions},
};

#[test]
fn test_fixed_breakdown_table() {
    let breakdown = FixedPricing.quote(6, "zimbabwe", "inland").unwrap();
    let text = format_breakdown(&breakdown, &ReportOptions::default());

    assert!(text.starts_with("FUEL PRICING BREAKDOWN (fixed)"));
    assert!(text.contains("Tier 6 | zimbabwe | inland"));

    for expected in [
        "Wholesale Price",
        "R19.20",
        "+ Retail Margin",
        "R3.60",
        "= Base Retail",
        "R22.80",
        "- Tier Discount",
        "-R2.28",
        "10.0%",
        "= After Discount",
        "R20.52",
        "+ Transport Cost",
        "R0.45",
        "= After Transport",
        "R20.97",
        "+ Currency Risk",
        "R1.05",
        "5.0%",
        "+ Political Risk",
        "R1.68",
        "8.0%",
        "FINAL PRICE/LITER",
        "R23.70",
        "VOLUME (LITERS)",
        "6,878",
        "TOTAL COST",
        "R162,981.78",
    ] {
        assert!(text.contains(expected), "missing '{}' in:\n{}", expected, text);
    }
}

#[test]
fn test_breakdown_rows_follow_pipeline_order() {
    let breakdown = FixedPricing.quote(6, "zimbabwe", "inland").unwrap();
    let text = format_breakdown(&breakdown, &ReportOptions::default());

    let positions: Vec<usize> = [
        "Wholesale Price",
        "Base Retail",
        "After Discount",
        "After Transport",
        "Political Risk",
        "FINAL PRICE/LITER",
        "TOTAL COST",
    ]
    .iter()
    .map(|label| text.find(label).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_dynamic_breakdown_table() {
    let breakdown = DynamicPricing.quote(6, "zimbabwe", "inland").unwrap();
    let text = format_breakdown(&breakdown, &ReportOptions::default());

    assert!(text.starts_with("FUEL PRICING BREAKDOWN (dynamic)"));
    for expected in [
        "Crude Cost",
        "R166.97",
        "$0.519/L x 322.00",
        "+ Fuel Levy",
        "R14.53",
        "8.7% government levy",
        "+ Wholesale Margin",
        "18.7%",
        "= Wholesale Price",
        "R215.44",
        "+ Retail Margin",
        "R34.04",
        "15.8%",
        "= Base Retail",
        "R249.48",
        "-R24.95",
        "R4.72",
        "2.1%",
        "R11.92",
        "R17.88",
        "R259.05",
        "R1,781,751.35",
    ] {
        assert!(text.contains(expected), "missing '{}' in:\n{}", expected, text);
    }
}

#[test]
fn test_custom_currency_symbol() {
    let breakdown = FixedPricing.quote(1, "botswana", "coastal").unwrap();
    let options = ReportOptions {
        currency_symbol: "P".to_string(),
    };
    let text = format_breakdown(&breakdown, &options);

    assert!(text.contains("P18.80"));
    assert!(!text.contains("R18.80"));
}

#[test]
fn test_comparison_table() {
    let breakdowns = vec![
        FixedPricing.quote(1, "south-africa", "coastal").unwrap(),
        FixedPricing.quote(6, "zimbabwe", "inland").unwrap(),
        FixedPricing.quote(14, "botswana", "coastal").unwrap(),
    ];
    let text = format_comparison(&breakdowns, &ReportOptions::default());

    for expected in [
        "TIER",
        "COUNTRY",
        "LOCATION",
        "FINAL PRICE/L",
        "south-africa",
        "R22.40",
        "2,500",
        "R56,006.25",
        "zimbabwe",
        "R23.70",
        "6,878",
        "R162,981.78",
        "botswana",
        "R17.28",
        "12,800",
        "R221,168.64",
    ] {
        assert!(text.contains(expected), "missing '{}' in:\n{}", expected, text);
    }
}

#[test]
fn test_comparison_table_empty() {
    let text = format_comparison(&[], &ReportOptions::default());
    assert!(text.contains("TOTAL COST"));
    assert!(!text.contains("R0.00"));
}

#[test]
fn test_json_rounding_matches_table_rounding() {
    for kind in [StrategyKind::Fixed, StrategyKind::Dynamic] {
        let pricing = strategy_for(kind);
        for request in PriceRequest::all() {
            let breakdown = pricing.compute(&request);
            let rounded = breakdown.rounded();

            let mut pairs: Vec<(&str, f64, f64)> = breakdown
                .components
                .iter()
                .zip(&rounded.components)
                .map(|(exact, json)| (exact.label, exact.per_liter, json.per_liter))
                .collect();
            pairs.push(("final", breakdown.final_per_liter, rounded.final_per_liter));
            pairs.push(("total", breakdown.total_cost, rounded.total_cost));

            for (label, exact, json) in pairs {
                assert_eq!(
                    format_amount(json, ""),
                    format_amount(exact, ""),
                    "{} {} {} {} {}: exact={}",
                    kind,
                    request.tier,
                    request.country,
                    request.grid_location,
                    label,
                    exact
                );
                assert_eq!(json, round2(exact));
            }
        }
    }
}

#[test]
fn test_near_half_cent_risk_rounds_down_in_both_views() {
    // 21.75 * 0.02 is stored just below 0.435
    let breakdown = FixedPricing.quote(1, "south-africa", "coastal").unwrap();
    let text = format_breakdown(&breakdown, &ReportOptions::default());
    let json = serde_json::to_value(breakdown.rounded()).unwrap();

    assert!(text.contains("R0.43"));
    assert!(!text.contains("R0.44"));
    assert_eq!(json["currency_risk_per_liter"], 0.43);
}
