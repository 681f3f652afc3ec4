use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::quantity::{coerce_decimal, coerce_json};

/// End-of-day figures reported from the data-entry screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub bread_count: BigDecimal,
    /// Grams of spoiled meat thrown away.
    pub waste_weight: BigDecimal,
    /// Always zero; the free-text "extra items" field is not submitted.
    pub extra_weight: BigDecimal,
}

impl SalesReport {
    pub fn from_raw(bread_count: &str, waste_weight: &str) -> Self {
        Self {
            bread_count: coerce_decimal(bread_count),
            waste_weight: coerce_decimal(waste_weight),
            extra_weight: BigDecimal::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub sales_trend: Vec<TrendPoint>,
    pub max_waste_day: Option<String>,
    pub max_waste_weight: BigDecimal,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            sales_trend: ["T2", "T3", "T4", "T5", "T6", "T7", "CN"]
                .into_iter()
                .map(|label| TrendPoint {
                    label: label.to_string(),
                    value: BigDecimal::zero(),
                })
                .collect(),
            max_waste_day: None,
            max_waste_weight: BigDecimal::zero(),
        }
    }
}

impl Stats {
    /// The worst waste day as `d/m/yyyy`. Values that are not dates are
    /// returned unchanged.
    pub fn max_waste_day_display(&self) -> Option<String> {
        let raw = self.max_waste_day.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.format("%-d/%-m/%Y").to_string());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.format("%-d/%-m/%Y").to_string());
        }
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictedItem {
    pub product: String,
    pub quantity: BigDecimal,
}

/// Prediction payload exactly as the backend returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub raw: Value,
}

impl Prediction {
    /// `{product, quantity}` entries, whether the payload is a bare array or
    /// wraps it under `items` / `predictions`.
    pub fn items(&self) -> Vec<PredictedItem> {
        let list = match &self.raw {
            Value::Array(list) => Some(list),
            Value::Object(map) => map
                .get("items")
                .or_else(|| map.get("predictions"))
                .and_then(Value::as_array),
            _ => None,
        };
        list.into_iter()
            .flatten()
            .filter_map(|entry| {
                let product = entry.get("product")?.as_str()?;
                Some(PredictedItem {
                    product: product.to_string(),
                    quantity: entry.get("quantity").map(coerce_json).unwrap_or_default(),
                })
            })
            .collect()
    }
}

/// Fixed figures shown on the prediction dashboard. No model backs them.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionDashboard {
    pub sales_trend: Vec<(String, u32)>,
    pub busiest_day: String,
    pub average_bread_count: u32,
    /// Purchased weight in kg per date.
    pub purchase_history: Vec<(String, u32)>,
    pub next_purchase_window: String,
}

impl PredictionDashboard {
    pub fn mock() -> Self {
        let pairs = |data: &[(&str, u32)]| {
            data.iter()
                .map(|(label, v)| (label.to_string(), *v))
                .collect::<Vec<_>>()
        };
        Self {
            sales_trend: pairs(&[("Thứ 2", 10), ("Thứ 3", 85), ("Thứ 4", 45), ("Thứ 5", 70)]),
            busiest_day: "Thứ ba".to_string(),
            average_bread_count: 100,
            purchase_history: pairs(&[
                ("1/3", 35),
                ("5/3", 80),
                ("10/3", 50),
                ("15/3", 55),
                ("20/3", 95),
                ("25/3", 70),
            ]),
            next_purchase_window: "28-29/03".to_string(),
        }
    }
}
