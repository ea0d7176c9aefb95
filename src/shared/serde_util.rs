//! Custom serde helpers for the TreasuryDirect wire format.
//!
//! The upstream plays loose with JSON types: decimal rates arrive as strings
//! (`"1.875"`), absent rates arrive as the empty string, amounts arrive as
//! either numbers or numeric strings, and dates arrive as bare timestamps
//! without a zone. Each module here is one field-level coercion rule, applied
//! through `#[serde(deserialize_with = ...)]` on the wire types.

/// Deserializes `Option<Decimal>` from a JSON number, a numeric string, `""`,
/// or `null`.
///
/// The upstream sends the empty string instead of null when a rate is absent;
/// that normalizes to `None`, never to zero. A non-empty string that fails
/// decimal parsing is an error.
pub mod decimal_opt {
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Decimal::from_str(&s)
                .map(Some)
                .map_err(|e| Error::custom(format!("invalid decimal string {s:?}: {e}"))),
            Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
                .map(Some)
                .map_err(|e| Error::custom(format!("invalid decimal number {n}: {e}"))),
            Some(other) => Err(Error::custom(format!(
                "expected decimal, numeric string, or null, got {other}"
            ))),
        }
    }
}

/// Deserializes `Option<f64>` from a JSON number, a numeric string, or `null`.
///
/// Unlike [`decimal_opt`], the empty string here is an error: the upstream's
/// empty-string-as-null habit is only documented for decimal rate fields.
pub mod f64_opt {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::custom(format!("number {n} is not representable as f64"))),
            Some(Value::String(s)) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|e| Error::custom(format!("invalid numeric string {s:?}: {e}"))),
            Some(other) => Err(Error::custom(format!(
                "expected number, numeric string, or null, got {other}"
            ))),
        }
    }
}

/// Deserializes `Option<NaiveDate>` from the date shapes the upstream emits.
///
/// Accepted formats, tried in order:
/// - `2024-04-09T00:00:00` (the API's usual zoneless timestamp)
/// - `2024-04-09`
/// - `04/09/2024` (the format the API itself takes in request paths)
pub mod date_opt {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| Error::custom(format!("unrecognized date {s:?}"))),
        }
    }

    fn parse(s: &str) -> Option<NaiveDate> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
            return Some(dt.date());
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }
}
