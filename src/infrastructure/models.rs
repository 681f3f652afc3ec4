//! JSON bodies exchanged with the ordering backend.
//!
//! Field names follow the backend (camelCase, Mongo `_id`). Numeric fields in
//! responses arrive as numbers or strings, so they are read as raw
//! [`Value`]s and coerced when converted into domain types.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::insights::{SalesReport, Stats, TrendPoint};
use crate::domain::order::{HistoricalItem, HistoricalOrder, OrderStatus, OrderSubmission};
use crate::domain::profile::{Profile, DEFAULT_PROFILE_PASSWORD};
use crate::domain::quantity::coerce_json;

// ── Requests ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub phone: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRequest<'a> {
    pub bread_count: f64,
    pub waste_weight: f64,
    pub extra_weight: f64,
    pub user_phone: &'a str,
}

impl<'a> SalesRequest<'a> {
    pub fn new(user_phone: &'a str, report: &SalesReport) -> Self {
        Self {
            bread_count: as_json_number(&report.bread_count),
            waste_weight: as_json_number(&report.waste_weight),
            extra_weight: as_json_number(&report.extra_weight),
            user_phone,
        }
    }
}

/// Quantities are sent as strings keyed by product id, e.g. `"chaLua": "0.5"`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest<'a> {
    #[serde(flatten)]
    pub quantities: BTreeMap<&'a str, String>,
    pub user_phone: &'a str,
}

impl<'a> From<&'a OrderSubmission> for OrderRequest<'a> {
    fn from(submission: &'a OrderSubmission) -> Self {
        Self {
            quantities: submission
                .lines
                .iter()
                .map(|line| (line.product_id.as_str(), line.quantity.to_string()))
                .collect(),
            user_phone: &submission.user_phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileRequest<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Profile> for ProfileRequest<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            name: &profile.name,
            phone: &profile.phone,
            address: &profile.address,
            password: DEFAULT_PROFILE_PASSWORD,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOrderRequest<'a> {
    pub order_id: &'a str,
}

// ── Responses ────────────────────────────────────────────────────────────────

/// Envelope for every write endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<Value>,
}

impl ApiReply {
    /// The order id, whether the backend sent it as a string or a number.
    pub fn order_id(&self) -> Option<String> {
        match self.order_id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ProfileDto {
    /// Missing fields become empty; a missing phone falls back to the one
    /// the profile was requested for.
    pub fn into_profile(self, requested_phone: &str) -> Profile {
        Profile {
            name: self.name.unwrap_or_default(),
            phone: self
                .phone
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| requested_phone.to_string()),
            address: self.address.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoricalItemDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub weight: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOrderDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<HistoricalItemDto>,
    #[serde(default)]
    pub total_weight: Value,
}

impl From<HistoricalOrderDto> for HistoricalOrder {
    fn from(dto: HistoricalOrderDto) -> Self {
        HistoricalOrder {
            id: dto.id,
            order_date: dto.order_date.unwrap_or_default(),
            status: OrderStatus::parse(dto.status.as_deref().unwrap_or_default()),
            items: dto
                .items
                .into_iter()
                .map(|item| HistoricalItem {
                    quantity: coerce_json(&item.quantity),
                    weight: coerce_json(&item.weight),
                    name: item.name,
                })
                .collect(),
            total_weight: coerce_json(&dto.total_weight),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrendPointDto {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    #[serde(default)]
    pub sales_trend: Option<Vec<TrendPointDto>>,
    #[serde(default)]
    pub max_waste_day: Option<String>,
    #[serde(default)]
    pub max_waste_weight: Value,
}

impl From<StatsDto> for Stats {
    fn from(dto: StatsDto) -> Self {
        let defaults = Stats::default();
        Stats {
            sales_trend: match dto.sales_trend {
                Some(points) => points
                    .into_iter()
                    .map(|p| TrendPoint {
                        value: coerce_json(&p.data),
                        label: p.label,
                    })
                    .collect(),
                None => defaults.sales_trend,
            },
            max_waste_day: dto.max_waste_day.filter(|d| !d.is_empty()),
            max_waste_weight: coerce_json(&dto.max_waste_weight),
        }
    }
}

fn as_json_number(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
