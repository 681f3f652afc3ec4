//! Order pricing.
//!
//! Line amounts are kept at full precision; only the order total is rounded,
//! once, to the currency's smallest unit.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::Serialize;

use super::catalog::PriceTable;
use super::quantity::coerce_decimal;

/// VND has no minor unit: totals are whole đồng.
pub const CURRENCY_SCALE: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceBasis {
    /// `weight × unit_price × quantity`
    PerWeight,
    /// `quantity × unit_price`
    PerUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: BigDecimal,
    pub weight: BigDecimal,
    pub basis: PriceBasis,
    /// Unit price captured when the line was created. Takes precedence over
    /// the price table so later price changes do not restate the line.
    pub unit_price: Option<BigDecimal>,
}

impl OrderLine {
    pub fn per_unit(product_id: impl Into<String>, quantity: BigDecimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            weight: BigDecimal::zero(),
            basis: PriceBasis::PerUnit,
            unit_price: None,
        }
    }

    pub fn per_weight(product_id: impl Into<String>, quantity: BigDecimal, weight: BigDecimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            weight,
            basis: PriceBasis::PerWeight,
            unit_price: None,
        }
    }

    /// Build a line from raw text fields, coercing anything unparseable to zero.
    pub fn from_raw(product_id: impl Into<String>, quantity: &str, weight: &str, basis: PriceBasis) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: coerce_decimal(quantity),
            weight: coerce_decimal(weight),
            basis,
            unit_price: None,
        }
    }

    /// Freeze the current table price into the line.
    pub fn snapshot(mut self, table: &PriceTable) -> Self {
        if self.unit_price.is_none() {
            self.unit_price = Some(table.unit_price_or_zero(&self.product_id));
        }
        self
    }

    pub fn effective_unit_price(&self, table: &PriceTable) -> BigDecimal {
        match &self.unit_price {
            Some(price) => price.clone(),
            None => table.unit_price_or_zero(&self.product_id),
        }
    }

    /// Unrounded amount for this line.
    pub fn amount(&self, table: &PriceTable) -> BigDecimal {
        let unit_price = self.effective_unit_price(table);
        match self.basis {
            PriceBasis::PerWeight => &self.weight * &unit_price * &self.quantity,
            PriceBasis::PerUnit => &self.quantity * &unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub product_id: String,
    pub quantity: BigDecimal,
    pub weight: BigDecimal,
    pub unit_price: BigDecimal,
    pub line_amount: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    pub lines: Vec<LineBreakdown>,
    pub total: BigDecimal,
}

/// Round a sum to whole currency units, ties away from zero.
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp)
}

/// Price every line and total them. Never fails: unknown products and
/// zero quantities simply contribute nothing.
pub fn price_lines(lines: &[OrderLine], table: &PriceTable) -> PricedOrder {
    let breakdown: Vec<LineBreakdown> = lines
        .iter()
        .map(|line| LineBreakdown {
            product_id: line.product_id.clone(),
            quantity: line.quantity.clone(),
            weight: line.weight.clone(),
            unit_price: line.effective_unit_price(table),
            line_amount: line.amount(table),
        })
        .collect();

    let sum = breakdown
        .iter()
        .fold(BigDecimal::zero(), |acc, l| acc + &l.line_amount);

    PricedOrder {
        lines: breakdown,
        total: round_currency(&sum),
    }
}

/// Shorthand for the total alone.
pub fn order_total(lines: &[OrderLine], table: &PriceTable) -> BigDecimal {
    price_lines(lines, table).total
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::catalog::{BAC_KIEN, CHA_BONG, CHA_DO, CHA_LUA, JAMBON, PATE, XUC_XICH_TOI};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn empty_order_totals_zero() {
        let priced = price_lines(&[], &PriceTable::standard());
        assert!(priced.lines.is_empty());
        assert_eq!(priced.total, BigDecimal::zero());
    }

    #[test]
    fn half_kilo_of_cha_lua_per_weight() {
        let lines = vec![OrderLine::per_weight(CHA_LUA, dec("0.5"), dec("0.5"))];
        let priced = price_lines(&lines, &PriceTable::standard());
        assert_eq!(priced.lines[0].line_amount, dec("26750"));
        assert_eq!(priced.total, dec("26750"));
    }

    #[test]
    fn empty_quantity_and_unknown_product_total_zero() {
        let lines = vec![
            OrderLine::from_raw(CHA_LUA, "", "0.5", PriceBasis::PerWeight),
            OrderLine::per_weight("unknownProduct", dec("1"), dec("1")),
        ];
        assert_eq!(order_total(&lines, &PriceTable::standard()), BigDecimal::zero());
    }

    #[test]
    fn half_kilo_of_every_listed_product() {
        let lines: Vec<OrderLine> = [CHA_LUA, CHA_DO, PATE, XUC_XICH_TOI, JAMBON, BAC_KIEN, CHA_BONG]
            .into_iter()
            .map(|id| OrderLine::per_unit(id, dec("0.5")))
            .collect();
        assert_eq!(order_total(&lines, &PriceTable::standard()), dec("424800"));
    }

    #[test]
    fn unknown_product_contributes_nothing() {
        let table = PriceTable::standard();
        let line = OrderLine::per_unit("caviar", dec("100"));
        assert_eq!(line.amount(&table), BigDecimal::zero());
    }

    #[test]
    fn per_unit_ignores_weight() {
        let table = PriceTable::standard();
        let mut line = OrderLine::per_unit(PATE, dec("2"));
        line.weight = dec("7");
        assert_eq!(line.amount(&table), dec("187000"));
    }

    #[test]
    fn garbage_input_behaves_like_zero() {
        let table = PriceTable::standard();
        let garbage = OrderLine::from_raw(JAMBON, "abc", "x", PriceBasis::PerWeight);
        let zero = OrderLine::per_weight(JAMBON, BigDecimal::zero(), BigDecimal::zero());
        assert_eq!(garbage.amount(&table), zero.amount(&table));
    }

    #[test]
    fn rounding_happens_once_at_the_total() {
        // Each line is 0.3 đồng; rounding per line would give 0.
        let table = PriceTable::new([("gram".to_string(), dec("0.3"))]);
        let lines = vec![
            OrderLine::per_unit("gram", dec("1")),
            OrderLine::per_unit("gram", dec("1")),
        ];
        let priced = price_lines(&lines, &table);
        assert_eq!(priced.lines[0].line_amount, dec("0.3"));
        assert_eq!(priced.total, dec("1"));
    }

    #[test]
    fn half_dong_rounds_up() {
        assert_eq!(round_currency(&dec("10.5")), dec("11"));
        assert_eq!(round_currency(&dec("10.49")), dec("10"));
    }

    #[test]
    fn reordering_lines_keeps_total() {
        let table = PriceTable::standard();
        let mut lines = vec![
            OrderLine::per_weight(CHA_DO, dec("1.25"), dec("0.4")),
            OrderLine::per_unit(PATE, dec("0.33")),
            OrderLine::per_weight(JAMBON, dec("3"), dec("0.7")),
        ];
        let forward = order_total(&lines, &table);
        lines.reverse();
        assert_eq!(order_total(&lines, &table), forward);
    }

    #[test]
    fn snapshot_price_survives_table_change() {
        let old = PriceTable::standard();
        let line = OrderLine::per_unit(CHA_LUA, dec("1")).snapshot(&old);

        let new = PriceTable::new([(CHA_LUA.to_string(), dec("200000"))]);
        assert_eq!(line.amount(&new), dec("107000"));
        assert_eq!(order_total(&[line], &new), dec("107000"));
    }

    #[test]
    fn negative_quantities_are_not_rejected_by_pricing() {
        let line = OrderLine::per_unit(CHA_LUA, dec("-1"));
        assert_eq!(line.amount(&PriceTable::standard()), dec("-107000"));
    }
}
