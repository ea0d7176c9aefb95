//! Wire types and decoding for security responses.
//!
//! The upstream's JSON is schema-loose, so decoding is an explicit
//! normalization pipeline rather than a bare `serde_json::from_str`:
//!
//! 1. Parse the body into a `serde_json::Value` (malformed JSON fails here).
//! 2. ASCII-lowercase every object key, which makes field matching
//!    case-insensitive against the all-lowercase serde renames below.
//! 3. Deserialize through `serde_path_to_error` so a failing field is named
//!    in the resulting [`DecodeError`].
//!
//! Per-field looseness (numbers-as-strings, empty-string-as-null decimals,
//! free-form enum tokens) is handled by the `shared::serde_util` helpers.

use crate::error::DecodeError;
use crate::shared::serde_util::{date_opt, decimal_opt, f64_opt};
use crate::shared::SecurityType;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Raw security record as the REST API sends it, fields coerced but not yet
/// converted to the domain type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SecurityResponse {
    #[serde(default)]
    pub cusip: Option<String>,
    #[serde(
        default,
        rename = "issuedate",
        deserialize_with = "date_opt::deserialize"
    )]
    pub issue_date: Option<NaiveDate>,
    #[serde(
        default,
        rename = "offeringamount",
        deserialize_with = "f64_opt::deserialize"
    )]
    pub offering_amount: Option<f64>,
    #[serde(default, rename = "securitytype")]
    pub security_type: SecurityType,
    #[serde(default, rename = "securityterm")]
    pub security_term: Option<String>,
    #[serde(
        default,
        rename = "announcementdate",
        deserialize_with = "date_opt::deserialize"
    )]
    pub announcement_date: Option<NaiveDate>,
    #[serde(
        default,
        rename = "auctiondate",
        deserialize_with = "date_opt::deserialize"
    )]
    pub auction_date: Option<NaiveDate>,
    #[serde(
        default,
        rename = "highdiscountrate",
        deserialize_with = "decimal_opt::deserialize"
    )]
    pub high_discount_rate: Option<Decimal>,
    #[serde(
        default,
        rename = "highinvestmentrate",
        deserialize_with = "decimal_opt::deserialize"
    )]
    pub high_investment_rate: Option<Decimal>,
    #[serde(
        default,
        rename = "highprice",
        deserialize_with = "decimal_opt::deserialize"
    )]
    pub high_price: Option<Decimal>,
    #[serde(
        default,
        rename = "maturitydate",
        deserialize_with = "date_opt::deserialize"
    )]
    pub maturity_date: Option<NaiveDate>,
}

/// Decode a single-security body.
pub fn decode_one(body: &str) -> Result<SecurityResponse, DecodeError> {
    decode(body)
}

/// Decode a listing body. `[]` decodes to an empty vec; one bad element fails
/// the whole call (no partial lists).
pub fn decode_many(body: &str) -> Result<Vec<SecurityResponse>, DecodeError> {
    decode(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    let value = lowercase_keys(value);
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        DecodeError::Shape {
            path,
            source: err.into_inner(),
        }
    })
}

/// ASCII-lowercase object keys, recursively. Upstream casing of field names
/// is not stable, so matching happens on the lowercased form.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), lowercase_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const FULL_RECORD: &str = r#"{
        "cusip": "912797JV0",
        "issueDate": "2024-04-09T00:00:00",
        "offeringAmount": "70000000000",
        "securityType": "Bill",
        "securityTerm": "26-Week",
        "announcementDate": "2024-04-04T00:00:00",
        "auctionDate": "2024-04-08T00:00:00",
        "highDiscountRate": "5.115",
        "highInvestmentRate": "5.315",
        "highPrice": "97.414083",
        "maturityDate": "2024-10-10T00:00:00"
    }"#;

    #[test]
    fn test_decode_one_maps_every_field() {
        let sec = decode_one(FULL_RECORD).unwrap();
        assert_eq!(sec.cusip.as_deref(), Some("912797JV0"));
        assert_eq!(sec.issue_date, NaiveDate::from_ymd_opt(2024, 4, 9));
        assert_eq!(sec.offering_amount, Some(70_000_000_000.0));
        assert_eq!(sec.security_type, SecurityType::Bill);
        assert_eq!(sec.security_term.as_deref(), Some("26-Week"));
        assert_eq!(sec.announcement_date, NaiveDate::from_ymd_opt(2024, 4, 4));
        assert_eq!(sec.auction_date, NaiveDate::from_ymd_opt(2024, 4, 8));
        assert_eq!(
            sec.high_discount_rate,
            Some(Decimal::from_str("5.115").unwrap())
        );
        assert_eq!(
            sec.high_investment_rate,
            Some(Decimal::from_str("5.315").unwrap())
        );
        assert_eq!(sec.high_price, Some(Decimal::from_str("97.414083").unwrap()));
        assert_eq!(sec.maturity_date, NaiveDate::from_ymd_opt(2024, 10, 10));
    }

    #[test]
    fn test_decode_one_absent_fields_are_none() {
        let sec = decode_one(r#"{"cusip": "912810TX6"}"#).unwrap();
        assert_eq!(sec.cusip.as_deref(), Some("912810TX6"));
        assert_eq!(sec.issue_date, None);
        assert_eq!(sec.offering_amount, None);
        assert_eq!(sec.security_type, SecurityType::Undefined);
        assert_eq!(sec.high_discount_rate, None);
        assert_eq!(sec.maturity_date, None);
    }

    #[test]
    fn test_decode_field_names_are_case_insensitive() {
        let body = r#"{
            "Cusip": "912797JV0",
            "IssueDate": "2024-04-09T00:00:00",
            "SECURITYTYPE": "BILL",
            "HighDiscountRate": "5.115"
        }"#;
        let sec = decode_one(body).unwrap();
        assert_eq!(sec.cusip.as_deref(), Some("912797JV0"));
        assert_eq!(sec.issue_date, NaiveDate::from_ymd_opt(2024, 4, 9));
        assert_eq!(sec.security_type, SecurityType::Bill);
        assert_eq!(
            sec.high_discount_rate,
            Some(Decimal::from_str("5.115").unwrap())
        );
    }

    #[test]
    fn test_decode_empty_string_decimals_are_none_not_zero() {
        // Announced securities carry empty strings where auction results
        // would go.
        let body = r#"{
            "cusip": "912797KH9",
            "securityType": "bill",
            "highDiscountRate": "",
            "highInvestmentRate": "",
            "highPrice": ""
        }"#;
        let sec = decode_one(body).unwrap();
        assert_eq!(sec.high_discount_rate, None);
        assert_eq!(sec.high_investment_rate, None);
        assert_eq!(sec.high_price, None);
    }

    #[test]
    fn test_decode_unknown_security_type_is_undefined_not_error() {
        let sec = decode_one(r#"{"cusip": "x", "securityType": "CMB"}"#).unwrap();
        assert_eq!(sec.security_type, SecurityType::Undefined);
    }

    #[test]
    fn test_decode_many_empty_array() {
        let secs = decode_many("[]").unwrap();
        assert!(secs.is_empty());
    }

    #[test]
    fn test_decode_many_two_records() {
        let body = r#"[
            {"cusip": "912797JV0", "securityType": "Bill"},
            {"cusip": "91282CKP5", "securityType": "note"}
        ]"#;
        let secs = decode_many(body).unwrap();
        assert_eq!(secs.len(), 2);
        assert_eq!(secs[0].security_type, SecurityType::Bill);
        assert_eq!(secs[1].security_type, SecurityType::Note);
    }

    #[test]
    fn test_decode_many_one_bad_element_fails_whole_call() {
        let body = r#"[
            {"cusip": "912797JV0", "highDiscountRate": "5.115"},
            {"cusip": "912797KH9", "highDiscountRate": "not-a-rate"}
        ]"#;
        let err = decode_many(body).unwrap_err();
        match err {
            DecodeError::Shape { path, .. } => {
                assert!(
                    path.contains("highdiscountrate"),
                    "path should name the offending field, got: {path}"
                );
            }
            other => panic!("expected Shape error, got: {other}"),
        }
    }

    #[test]
    fn test_decode_malformed_json_is_json_error() {
        assert!(matches!(decode_one("<html>"), Err(DecodeError::Json(_))));
        // An empty body is not valid JSON either; the sentinel branch is the
        // transport layer's job and must never leak down here.
        assert!(matches!(decode_many(""), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_decode_wrong_top_level_shape() {
        assert!(decode_many(r#"{"cusip": "912797JV0"}"#).is_err());
        assert!(decode_one(r#"[{"cusip": "912797JV0"}]"#).is_err());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"cusip": "912797JV0", "pricePer100": "97.41", "interestRate": ""}"#;
        let sec = decode_one(body).unwrap();
        assert_eq!(sec.cusip.as_deref(), Some("912797JV0"));
    }
}
