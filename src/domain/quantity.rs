use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde_json::Value;
use thiserror::Error;

/// Parse a plain decimal: optional sign, digits, optional fraction.
///
/// Exponents, digit separators and anything else `BigDecimal::from_str`
/// would also accept are refused, so the parsed value never has more digits
/// than the input.
fn parse_plain_decimal(s: &str) -> Option<BigDecimal> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };
    BigDecimal::from_str(&normalized).ok()
}

/// Parse free-form numeric input, falling back to zero.
///
/// Empty, whitespace-only and unparseable strings all become `0`. Sign is
/// preserved: `"-1"` coerces to `-1`.
pub fn coerce_decimal(raw: &str) -> BigDecimal {
    parse_plain_decimal(raw.trim()).unwrap_or_else(BigDecimal::zero)
}

/// Same as [`coerce_decimal`] for values that arrive as JSON, where the
/// backend sends quantities either as numbers or as strings. Numbers that
/// serialize in exponent form coerce to zero like any other non-plain input.
pub fn coerce_json(value: &Value) -> BigDecimal {
    match value {
        Value::Number(n) => coerce_decimal(&n.to_string()),
        Value::String(s) => coerce_decimal(s),
        Value::Bool(true) => BigDecimal::from(1),
        _ => BigDecimal::zero(),
    }
}

/// A quantity that passed validation: numeric, non-negative, below the ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity(BigDecimal);

impl Quantity {
    pub fn zero() -> Self {
        Quantity(BigDecimal::zero())
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityRejection {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is negative")]
    Negative(BigDecimal),
    #[error("{value} exceeds the maximum of {ceiling}")]
    AboveCeiling { value: BigDecimal, ceiling: BigDecimal },
}

/// Validate raw form input before it reaches pricing or submission.
///
/// An empty field is a valid zero, matching the form's `0` placeholder.
pub fn validate_quantity(raw: &str, ceiling: &BigDecimal) -> Result<Quantity, QuantityRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Quantity::zero());
    }
    let value = parse_plain_decimal(trimmed)
        .ok_or_else(|| QuantityRejection::NotANumber(trimmed.to_string()))?;
    if value < BigDecimal::zero() {
        return Err(QuantityRejection::Negative(value));
    }
    if &value > ceiling {
        return Err(QuantityRejection::AboveCeiling {
            value,
            ceiling: ceiling.clone(),
        });
    }
    Ok(Quantity(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn coerce_empty_and_garbage_to_zero() {
        assert_eq!(coerce_decimal(""), BigDecimal::zero());
        assert_eq!(coerce_decimal("   "), BigDecimal::zero());
        assert_eq!(coerce_decimal("abc"), BigDecimal::zero());
        assert_eq!(coerce_decimal("1,5"), BigDecimal::zero());
        assert_eq!(coerce_decimal("1_000"), BigDecimal::zero());
        assert_eq!(coerce_decimal("1e3"), BigDecimal::zero());
        assert_eq!(coerce_decimal("1e10000000"), BigDecimal::zero());
        assert_eq!(coerce_decimal("."), BigDecimal::zero());
        assert_eq!(coerce_decimal("-"), BigDecimal::zero());
        assert_eq!(coerce_decimal("0x10"), BigDecimal::zero());
    }

    #[test]
    fn coerce_accepts_bare_fraction_forms() {
        assert_eq!(coerce_decimal(".5"), dec("0.5"));
        assert_eq!(coerce_decimal("5."), dec("5"));
        assert_eq!(coerce_decimal("+2"), dec("2"));
    }

    #[test]
    fn coerce_keeps_numbers_and_sign() {
        assert_eq!(coerce_decimal(" 0.5 "), dec("0.5"));
        assert_eq!(coerce_decimal("-2"), dec("-2"));
        assert_eq!(coerce_decimal("12"), dec("12"));
    }

    #[test]
    fn coerce_json_accepts_numbers_and_strings() {
        assert_eq!(coerce_json(&json!(1.5)), dec("1.5"));
        assert_eq!(coerce_json(&json!("2")), dec("2"));
        assert_eq!(coerce_json(&json!(null)), BigDecimal::zero());
        assert_eq!(coerce_json(&json!({"kg": 1})), BigDecimal::zero());
        assert_eq!(coerce_json(&json!("1e10000000")), BigDecimal::zero());
        assert_eq!(coerce_json(&json!(1e300)), BigDecimal::zero());
    }

    #[test]
    fn validate_empty_is_zero() {
        let q = validate_quantity("", &dec("1000")).expect("empty is valid");
        assert_eq!(q, Quantity::zero());
    }

    #[test]
    fn validate_accepts_in_range_value() {
        let q = validate_quantity("2.5", &dec("1000")).expect("valid");
        assert_eq!(q.value(), &dec("2.5"));
    }

    #[test]
    fn validate_rejects_with_reason() {
        let ceiling = dec("1000");
        assert_eq!(
            validate_quantity("abc", &ceiling),
            Err(QuantityRejection::NotANumber("abc".to_string()))
        );
        assert_eq!(
            validate_quantity("1_000", &ceiling),
            Err(QuantityRejection::NotANumber("1_000".to_string()))
        );
        assert_eq!(
            validate_quantity("1e2", &ceiling),
            Err(QuantityRejection::NotANumber("1e2".to_string()))
        );
        assert_eq!(
            validate_quantity("-1", &ceiling),
            Err(QuantityRejection::Negative(dec("-1")))
        );
        assert!(matches!(
            validate_quantity("1000.5", &ceiling),
            Err(QuantityRejection::AboveCeiling { .. })
        ));
    }

    #[test]
    fn ceiling_itself_is_allowed() {
        assert!(validate_quantity("1000", &dec("1000")).is_ok());
    }
}
