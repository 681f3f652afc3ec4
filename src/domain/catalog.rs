use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

/// Canonical product identifiers.
pub const CHA_LUA: &str = "chaLua";
pub const CHA_DO: &str = "chaDo";
pub const GIO_THU: &str = "gioThu";
pub const PATE: &str = "pate";
pub const XUC_XICH_TOI: &str = "xucXichToi";
pub const JAMBON: &str = "jambon";
pub const BAC_KIEN: &str = "bacKien";
pub const CHA_BONG: &str = "chaBong";

/// Products offered on the order form, in form order.
pub const ORDER_FORM_PRODUCTS: [&str; 7] =
    [CHA_LUA, CHA_DO, GIO_THU, JAMBON, XUC_XICH_TOI, PATE, BAC_KIEN];

/// Alternate spellings the backend and older screens use for a product.
const ALIASES: &[(&str, &str)] = &[
    ("Chả lụa", CHA_LUA),
    ("Chả đỏ", CHA_DO),
    ("Giò thủ", GIO_THU),
    ("Pate", PATE),
    ("Xúc xích tỏi", XUC_XICH_TOI),
    ("Jambon", JAMBON),
    ("Bơ", BAC_KIEN),
    ("Bơ kiến", BAC_KIEN),
    ("butter", BAC_KIEN),
    ("Chà bông", CHA_BONG),
];

/// Human-readable label for a canonical product id. Unknown ids are returned as-is.
pub fn display_name(product_id: &str) -> &str {
    match product_id {
        CHA_LUA => "Chả lụa",
        CHA_DO => "Chả đỏ",
        GIO_THU => "Giò thủ",
        PATE => "Pate",
        XUC_XICH_TOI => "Xúc xích tỏi",
        JAMBON => "Jambon",
        BAC_KIEN => "Bơ kiến",
        CHA_BONG => "Chà bông",
        other => other,
    }
}

/// Static unit prices in VND per kilogram.
///
/// Lookups go through [`PriceTable::resolve`], so display names and aliases
/// price the same as canonical ids. A product missing from the table prices
/// at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<String, BigDecimal>,
}

impl PriceTable {
    pub fn new(prices: impl IntoIterator<Item = (String, BigDecimal)>) -> Self {
        Self {
            prices: prices.into_iter().collect(),
        }
    }

    /// The shop's published price list.
    pub fn standard() -> Self {
        Self::new(
            [
                (CHA_LUA, 107_000u32),
                (CHA_DO, 143_000),
                (PATE, 93_500),
                (XUC_XICH_TOI, 113_300),
                (JAMBON, 173_800),
                (BAC_KIEN, 99_000),
                (CHA_BONG, 120_000),
            ]
            .into_iter()
            .map(|(id, price)| (id.to_string(), BigDecimal::from(price))),
        )
    }

    /// Map a product id, display name or alias to the canonical id.
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        let trimmed = name.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map(|(_, id)| *id)
            .unwrap_or(trimmed)
    }

    pub fn unit_price(&self, product: &str) -> Option<&BigDecimal> {
        self.prices.get(self.resolve(product))
    }

    /// Unit price, or zero when the product is not listed.
    pub fn unit_price_or_zero(&self, product: &str) -> BigDecimal {
        self.unit_price(product).cloned().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigDecimal)> {
        self.prices.iter().map(|(id, price)| (id.as_str(), price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}
