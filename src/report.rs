//! Text rendering for price breakdowns
//!
//! Everything here is presentation: amounts are rounded to 2 decimals only
//! when formatted, never fed back into the pricing pipeline.

use comfy_table::{
    presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
};

use crate::pricing::{ComponentOp, PriceBreakdown, PriceComponent};

/// Presentation options for reports
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Prefix for monetary amounts
    pub currency_symbol: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
        }
    }
}

/// Render one breakdown as a component table followed by the totals
pub fn format_breakdown(breakdown: &PriceBreakdown, options: &ReportOptions) -> String {
    let symbol = options.currency_symbol.as_str();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("COMPONENT").fg(Color::Cyan),
        Cell::new("PER LITER").fg(Color::Cyan),
        Cell::new("DETAILS").fg(Color::Cyan),
    ]);

    for component in &breakdown.components {
        table.add_row(vec![
            Cell::new(component_label(component)),
            Cell::new(component_amount(component, symbol)),
            Cell::new(component_details(component)),
        ]);
    }

    table.add_row(vec![
        Cell::new("FINAL PRICE/LITER").add_attribute(Attribute::Bold),
        Cell::new(format_amount(breakdown.final_per_liter, symbol)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("VOLUME (LITERS)"),
        Cell::new(format_volume(breakdown.estimated_volume)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL COST").add_attribute(Attribute::Bold),
        Cell::new(format_amount(breakdown.total_cost, symbol)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    format!(
        "FUEL PRICING BREAKDOWN ({})\nTier {} | {} | {}\n{}",
        breakdown.strategy, breakdown.tier, breakdown.country, breakdown.grid_location, table
    )
}

/// Render several breakdowns side by side, one row per scenario
pub fn format_comparison(breakdowns: &[PriceBreakdown], options: &ReportOptions) -> String {
    let symbol = options.currency_symbol.as_str();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("TIER").fg(Color::Cyan),
        Cell::new("COUNTRY").fg(Color::Cyan),
        Cell::new("LOCATION").fg(Color::Cyan),
        Cell::new("FINAL PRICE/L").fg(Color::Cyan),
        Cell::new("VOLUME").fg(Color::Cyan),
        Cell::new("TOTAL COST").fg(Color::Cyan),
    ]);

    for breakdown in breakdowns {
        table.add_row(vec![
            Cell::new(breakdown.tier),
            Cell::new(breakdown.country),
            Cell::new(breakdown.grid_location),
            Cell::new(format_amount(breakdown.final_per_liter, symbol)),
            Cell::new(format_volume(breakdown.estimated_volume)),
            Cell::new(format_amount(breakdown.total_cost, symbol)),
        ]);
    }

    for index in 3..=5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

fn component_label(component: &PriceComponent) -> String {
    match component.op {
        ComponentOp::Base => component.label.to_string(),
        ComponentOp::Add => format!("+ {}", component.label),
        ComponentOp::Subtract => format!("- {}", component.label),
        ComponentOp::Subtotal => format!("= {}", component.label),
    }
}

fn component_amount(component: &PriceComponent, symbol: &str) -> String {
    match component.op {
        ComponentOp::Subtract => format_amount(-component.per_liter, symbol),
        _ => format_amount(component.per_liter, symbol),
    }
}

fn component_details(component: &PriceComponent) -> String {
    match (component.pct, component.note.as_deref()) {
        (Some(pct), Some(note)) => format!("{} {}", format_pct(pct), note),
        (Some(pct), None) => format_pct(pct),
        (None, Some(note)) => note.to_string(),
        (None, None) => String::new(),
    }
}

/// Format a fraction as a percentage with one decimal, e.g. 0.087 -> "8.7%"
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a monetary amount with 2 decimals and thousands separators.
/// Negative amounts put the sign before the symbol: "-R2.28".
pub fn format_amount(value: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Format a liter volume with thousands separators
pub fn format_volume(liters: u32) -> String {
    group_thousands(&liters.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(23.6961, "R"), "R23.70");
        assert_eq!(format_amount(162_981.7758, "R"), "R162,981.78");
        assert_eq!(format_amount(1_781_751.349, "$"), "$1,781,751.35");
        assert_eq!(format_amount(-2.28, "R"), "-R2.28");
        assert_eq!(format_amount(0.0, "R"), "R0.00");
    }

    #[test]
    fn test_format_amount_negative_zero() {
        assert_eq!(format_amount(-0.0001, "R"), "R0.00");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(6878), "6,878");
        assert_eq!(format_volume(12800), "12,800");
        assert_eq!(format_volume(500), "500");
        assert_eq!(format_volume(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.10), "10.0%");
        assert_eq!(format_pct(0.087), "8.7%");
        assert_eq!(format_pct(0.0), "0.0%");
    }

    #[test]
    fn test_component_label() {
        let add = PriceComponent::new("Transport Cost", ComponentOp::Add, 0.45);
        let sub = PriceComponent::new("Tier Discount", ComponentOp::Subtract, 2.28);
        let total = PriceComponent::new("Base Retail", ComponentOp::Subtotal, 22.8);

        assert_eq!(component_label(&add), "+ Transport Cost");
        assert_eq!(component_label(&sub), "- Tier Discount");
        assert_eq!(component_label(&total), "= Base Retail");
        assert_eq!(component_amount(&sub, "R"), "-R2.28");
    }

    #[test]
    fn test_component_details() {
        let both = PriceComponent::new("Fuel Levy", ComponentOp::Add, 14.53)
            .with_pct(0.087)
            .with_note("government levy");
        let plain = PriceComponent::new("Retail Margin", ComponentOp::Add, 3.6);

        assert_eq!(component_details(&both), "8.7% government levy");
        assert_eq!(component_details(&plain), "");
    }
}
