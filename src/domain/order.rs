use bigdecimal::BigDecimal;

use super::catalog::{PriceTable, ORDER_FORM_PRODUCTS};
use super::errors::DomainError;
use super::pricing::{price_lines, OrderLine, PriceBasis, PricedOrder};
use super::quantity::validate_quantity;

/// Raw text the user typed on the order screen, one field per product (kg).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    fields: Vec<(&'static str, String)>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            fields: ORDER_FORM_PRODUCTS
                .iter()
                .map(|id| (*id, String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, product_id: &str, raw: impl Into<String>) -> Result<(), DomainError> {
        let field = self
            .fields
            .iter_mut()
            .find(|(id, _)| *id == product_id)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("'{}' is not on the order form", product_id))
            })?;
        field.1 = raw.into();
        Ok(())
    }

    pub fn with(mut self, product_id: &str, raw: impl Into<String>) -> Result<Self, DomainError> {
        self.set(product_id, raw)?;
        Ok(self)
    }

    pub fn get(&self, product_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, raw)| raw.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(id, raw)| (*id, raw.as_str()))
    }

    /// Lines for the live total. Unparseable fields count as zero.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.fields
            .iter()
            .map(|(id, raw)| OrderLine::from_raw(*id, raw, "", PriceBasis::PerUnit))
            .collect()
    }

    pub fn quote(&self, table: &PriceTable) -> PricedOrder {
        price_lines(&self.lines(), table)
    }

    /// Strictly validate every field and freeze current prices into the lines.
    pub fn submit(
        &self,
        user_phone: &str,
        table: &PriceTable,
        ceiling: &BigDecimal,
    ) -> Result<OrderSubmission, DomainError> {
        let mut lines = Vec::with_capacity(self.fields.len());
        for (id, raw) in &self.fields {
            let quantity = validate_quantity(raw, ceiling)
                .map_err(|reason| DomainError::InvalidInput(format!("{}: {}", id, reason)))?;
            lines.push(OrderLine::per_unit(*id, quantity.into_inner()).snapshot(table));
        }
        Ok(OrderSubmission {
            user_phone: user_phone.to_string(),
            lines,
        })
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated order ready to send, with prices captured at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub user_phone: String,
    pub lines: Vec<OrderLine>,
}

impl OrderSubmission {
    pub fn priced(&self, table: &PriceTable) -> PricedOrder {
        price_lines(&self.lines, table)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub priced: PricedOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
    Unknown,
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => OrderStatus::Completed,
            "pending" => OrderStatus::Pending,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Pending => "Đang xử lý",
            OrderStatus::Cancelled => "Đã hủy",
            OrderStatus::Unknown => "Không xác định",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalItem {
    /// Display name as stored by the backend, e.g. "Chả lụa".
    pub name: String,
    pub quantity: BigDecimal,
    pub weight: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalOrder {
    pub id: String,
    pub order_date: String,
    pub status: OrderStatus,
    pub items: Vec<HistoricalItem>,
    pub total_weight: BigDecimal,
}

impl HistoricalOrder {
    /// Last six characters of the id, as shown next to each order.
    pub fn short_ref(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }

    pub fn lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|item| OrderLine::per_weight(item.name.clone(), item.quantity.clone(), item.weight.clone()))
            .collect()
    }

    /// Recompute the order's value. History items carry no price, so the
    /// current table is used.
    pub fn priced(&self, table: &PriceTable) -> PricedOrder {
        price_lines(&self.lines(), table)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedHistoricalOrder {
    pub order: HistoricalOrder,
    pub priced: PricedOrder,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::Zero;

    use super::*;
    use crate::domain::catalog::{BAC_KIEN, CHA_LUA, GIO_THU, JAMBON};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn item(name: &str, quantity: &str, weight: &str) -> HistoricalItem {
        HistoricalItem {
            name: name.to_string(),
            quantity: dec(quantity),
            weight: dec(weight),
        }
    }

    #[test]
    fn new_form_has_every_product_blank() {
        let form = OrderForm::new();
        assert_eq!(form.fields().count(), 7);
        assert!(form.fields().all(|(_, raw)| raw.is_empty()));
        assert_eq!(form.quote(&PriceTable::standard()).total, BigDecimal::zero());
    }

    #[test]
    fn setting_unknown_product_is_rejected() {
        let mut form = OrderForm::new();
        assert!(matches!(
            form.set("caviar", "1"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn live_quote_tolerates_garbage() {
        let form = OrderForm::new()
            .with(CHA_LUA, "1")
            .and_then(|f| f.with(JAMBON, "lots"))
            .expect("known products");
        assert_eq!(form.quote(&PriceTable::standard()).total, dec("107000"));
    }

    #[test]
    fn exponent_input_quotes_as_zero_without_expanding() {
        let started = std::time::Instant::now();
        let form = OrderForm::new()
            .with(CHA_LUA, "1e10000000")
            .and_then(|f| f.with(JAMBON, "1"))
            .expect("known products");
        assert_eq!(form.quote(&PriceTable::standard()).total, dec("173800"));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn submit_rejects_separator_and_exponent_forms() {
        for raw in ["1_000", "1e3"] {
            let form = OrderForm::new().with(CHA_LUA, raw).expect("known product");
            assert!(matches!(
                form.submit("0900", &PriceTable::standard(), &dec("1000")),
                Err(DomainError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn unpriced_form_product_quotes_zero() {
        let form = OrderForm::new().with(GIO_THU, "3").expect("known product");
        assert_eq!(form.quote(&PriceTable::standard()).total, BigDecimal::zero());
    }

    #[test]
    fn submit_rejects_negative_quantity_naming_the_field() {
        let form = OrderForm::new().with(BAC_KIEN, "-2").expect("known product");
        let err = form
            .submit("0900", &PriceTable::standard(), &dec("1000"))
            .expect_err("negative must be rejected");
        match err {
            DomainError::InvalidInput(msg) => assert!(msg.starts_with(BAC_KIEN)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn submit_snapshots_prices() {
        let form = OrderForm::new().with(CHA_LUA, "2").expect("known product");
        let submission = form
            .submit("0900", &PriceTable::standard(), &dec("1000"))
            .expect("valid form");
        assert_eq!(submission.lines.len(), 7);
        assert!(submission.lines.iter().all(|l| l.unit_price.is_some()));

        let repriced = PriceTable::new([(CHA_LUA.to_string(), dec("1"))]);
        assert_eq!(submission.priced(&repriced).total, dec("214000"));
    }

    #[test]
    fn history_total_is_weight_times_price_times_quantity() {
        let order = HistoricalOrder {
            id: "65f1c0ffee1234abcdef".to_string(),
            order_date: "2025-03-20".to_string(),
            status: OrderStatus::parse("pending"),
            items: vec![item("Chả lụa", "2", "0.5"), item("Bơ", "1", "1"), item("Giò thủ", "4", "1")],
            total_weight: dec("2"),
        };
        let priced = order.priced(&PriceTable::standard());
        assert_eq!(priced.lines[0].line_amount, dec("107000"));
        assert_eq!(priced.total, dec("206000"));
    }

    #[test]
    fn short_ref_is_last_six_chars() {
        let mut order = HistoricalOrder {
            id: "65f1c0ffee1234abcdef".to_string(),
            order_date: String::new(),
            status: OrderStatus::Unknown,
            items: vec![],
            total_weight: BigDecimal::zero(),
        };
        assert_eq!(order.short_ref(), "abcdef");
        order.id = "abc".to_string();
        assert_eq!(order.short_ref(), "abc");
    }

    #[test]
    fn status_labels() {
        assert_eq!(OrderStatus::parse("completed").label(), "Hoàn thành");
        assert_eq!(OrderStatus::parse("cancelled"), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::parse("shipped"), OrderStatus::Unknown);
    }
}
