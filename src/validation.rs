//! Request checks shared by the warehouse and inventory services.
//!
//! Every check short-circuits: callers run them in a fixed order and the first
//! failure is the one reported to the client.

use crate::errors::ServiceError;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Optional `+CC ` prefix, optional parenthesised area code, then 3-3-4 digits
/// separated by space, dot or hyphen.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$")
        .case_insensitive(true)
        .build()
        .expect("phone pattern is a valid regex")
});

/// True when a text field was supplied and is not blank.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// True when a JSON field was supplied and is neither null nor a blank string.
pub fn is_present_value(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Fails with a message naming every missing field, in declaration order.
pub fn require_fields(resource: &str, fields: &[(&str, bool)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::ValidationError(format!(
            "Please provide complete information for the {}. Missing: {}",
            resource,
            missing.join(", ")
        )))
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email)
}

/// Reads a whole number from a JSON number or a numeric string.
pub fn parse_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Parses a quantity that has already passed the presence check.
pub fn require_quantity(value: Option<&Value>) -> Result<i32, ServiceError> {
    value
        .and_then(parse_integer)
        .ok_or_else(|| ServiceError::invalid_field("quantity", "Quantity must be a number"))
}

/// Takes the value of a text field that has already passed the presence check.
pub fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("+1 (646) 123-1234" ; "country code and parenthesised area code")]
    #[test_case("(646) 123-1234" ; "parenthesised area code")]
    #[test_case("646-123-1234" ; "hyphens")]
    #[test_case("646.123.1234" ; "dots")]
    #[test_case("646 123 1234" ; "spaces")]
    #[test_case("+44 207.123.4567" ; "two digit country code")]
    fn accepts_phone(phone: &str) {
        assert!(is_valid_phone(phone));
    }

    #[test_case("6461231234" ; "no separators")]
    #[test_case("+123 646 123 1234" ; "three digit country code")]
    #[test_case("646-123-123" ; "short subscriber number")]
    #[test_case("phone: 646-123-1234" ; "leading text")]
    #[test_case("" ; "empty")]
    fn rejects_phone(phone: &str) {
        assert!(!is_valid_phone(phone));
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("paujla@instock.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("paujla.instock.com"));
        assert!(!is_valid_email("@instock.com"));
        assert!(!is_valid_email("paujla@"));
    }

    #[test]
    fn presence_treats_blank_as_missing() {
        assert!(is_present(&Some("x".into())));
        assert!(!is_present(&Some("   ".into())));
        assert!(!is_present(&None));

        assert!(is_present_value(&Some(json!(0))));
        assert!(!is_present_value(&Some(Value::Null)));
        assert!(!is_present_value(&Some(json!(""))));
    }

    #[test]
    fn require_fields_lists_every_missing_field() {
        let err = require_fields(
            "warehouse",
            &[("warehouse_name", true), ("city", false), ("country", false)],
        )
        .unwrap_err();
        assert_matches!(err, ServiceError::ValidationError(ref msg) if msg.ends_with("Missing: city, country"));
        assert!(require_fields("warehouse", &[("city", true)]).is_ok());
    }

    #[test]
    fn quantity_parsing() {
        assert_eq!(parse_integer(&json!(10)), Some(10));
        assert_eq!(parse_integer(&json!(0)), Some(0));
        assert_eq!(parse_integer(&json!(" 25 ")), Some(25));
        assert_eq!(parse_integer(&json!(3.0)), Some(3));
        assert_eq!(parse_integer(&json!(2.5)), None);
        assert_eq!(parse_integer(&json!("ten")), None);
        assert_eq!(parse_integer(&json!(true)), None);
        assert_eq!(parse_integer(&json!(i64::MAX)), None);

        let err = require_quantity(Some(&json!("lots"))).unwrap_err();
        assert_eq!(err.error_type(), Some("quantity"));
    }

    proptest! {
        #[test]
        fn formatted_ten_digit_numbers_are_accepted(
            area in 100u32..1000,
            exchange in 100u32..1000,
            line in 0u32..10000,
            sep in prop::sample::select(vec![" ", ".", "-"]),
        ) {
            let phone = format!("({area}) {exchange}{sep}{line:04}");
            prop_assert!(is_valid_phone(&phone));
        }

        #[test]
        fn digits_without_separators_are_rejected(n in 1_000_000_000u64..10_000_000_000u64) {
            prop_assert!(!is_valid_phone(&n.to_string()));
        }
    }
}
