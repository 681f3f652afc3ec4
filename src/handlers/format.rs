use std::fmt::Write;

use bigdecimal::BigDecimal;

use crate::domain::catalog::{display_name, PriceTable};
use crate::domain::insights::{Prediction, PredictionDashboard, Stats};
use crate::domain::order::PricedHistoricalOrder;
use crate::domain::pricing::{round_currency, PricedOrder};
use crate::domain::profile::Profile;

/// `26750` → `26,750đ`. Amounts are shown in whole đồng.
pub fn format_vnd(amount: &BigDecimal) -> String {
    let digits = round_currency(amount).to_string();
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}đ", sign, grouped)
}

pub fn render_prices(table: &PriceTable) -> String {
    let mut out = String::new();
    for (id, price) in table.iter() {
        let _ = writeln!(out, "{:<14} {:>10}/kg", display_name(id), format_vnd(price));
    }
    out
}

pub fn render_quote(priced: &PricedOrder) -> String {
    let mut out = String::new();
    for line in priced.lines.iter().filter(|l| l.quantity != BigDecimal::from(0)) {
        let _ = writeln!(
            out,
            "{:<14} {:>6} kg × {:>9} = {:>12}",
            display_name(&line.product_id),
            line.quantity,
            format_vnd(&line.unit_price),
            format_vnd(&line.line_amount),
        );
    }
    let _ = writeln!(out, "Total: {}", format_vnd(&priced.total));
    out
}

pub fn render_history(orders: &[PricedHistoricalOrder]) -> String {
    if orders.is_empty() {
        return "No orders yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in orders {
        let order = &entry.order;
        let _ = writeln!(
            out,
            "#{}  {}  [{}]",
            order.short_ref(),
            order.order_date,
            order.status.label()
        );
        for (item, line) in order.items.iter().zip(&entry.priced.lines) {
            let _ = writeln!(
                out,
                "  {:<14} x{} {}kg {:>12}",
                item.name,
                item.quantity,
                item.weight,
                format_vnd(&line.line_amount),
            );
        }
        let _ = writeln!(
            out,
            "  Total weight: {}kg   Total: {}",
            order.total_weight,
            format_vnd(&entry.priced.total)
        );
    }
    out
}

pub fn render_profile(profile: &Profile) -> String {
    format!(
        "Name:    {}\nPhone:   {}\nAddress: {}\n",
        profile.name, profile.phone, profile.address
    )
}

pub fn render_stats(stats: &Stats) -> String {
    let mut out = String::from("Sales trend:\n");
    for point in &stats.sales_trend {
        let _ = writeln!(out, "  {:<4} {}", point.label, point.value);
    }
    let _ = writeln!(
        out,
        "Busiest day: {}",
        stats
            .max_waste_day_display()
            .unwrap_or_else(|| "no data yet".to_string())
    );
    let _ = writeln!(out, "Waste: {} gram", stats.max_waste_weight);
    out
}

pub fn render_prediction(prediction: &Prediction) -> String {
    let items = prediction.items();
    if items.is_empty() {
        return format!("{}\n", prediction.raw);
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<14} {}", item.product, item.quantity);
    }
    out
}

pub fn render_dashboard(dashboard: &PredictionDashboard) -> String {
    let mut out = String::from("Sales trend:\n");
    for (label, value) in &dashboard.sales_trend {
        let _ = writeln!(out, "  {:<6} {}", label, value);
    }
    let _ = writeln!(out, "Busiest day: {}", dashboard.busiest_day);
    let _ = writeln!(out, "Average loaves: {}", dashboard.average_bread_count);
    let _ = writeln!(out, "Purchases:");
    for (date, kg) in &dashboard.purchase_history {
        let _ = writeln!(out, "  {:<6} {}kg", date, kg);
    }
    let _ = writeln!(out, "Next purchase expected: {}", dashboard.next_purchase_window);
    out
}
