//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the upstream API sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Cusip ───────────────────────────────────────────────────────────────────

/// Newtype for CUSIP security identifiers (e.g. `"912797JV0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cusip(String);

impl Cusip {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cusip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cusip {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Cusip {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Cusip {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Cusip(s.to_string()))
    }
}

impl Serialize for Cusip {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cusip {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Cusip(s))
    }
}

// ─── SecurityType ────────────────────────────────────────────────────────────

/// Treasury security class, normalized from the upstream's free-form token.
///
/// Unrecognized or missing tokens resolve to `Undefined` — the upstream is not
/// consistent enough about this field for an unknown value to be an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SecurityType {
    #[default]
    Undefined,
    Bill,
    Note,
    Bond,
}

impl SecurityType {
    /// Case-insensitive token parse. Never fails.
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("bill") {
            SecurityType::Bill
        } else if token.eq_ignore_ascii_case("note") {
            SecurityType::Note
        } else if token.eq_ignore_ascii_case("bond") {
            SecurityType::Bond
        } else {
            SecurityType::Undefined
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityType::Undefined => "Undefined",
            SecurityType::Bill => "Bill",
            SecurityType::Note => "Note",
            SecurityType::Bond => "Bond",
        }
    }
}

impl std::fmt::Display for SecurityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for SecurityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(token.as_deref().map(Self::parse).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cusip_serde() {
        let cusip = Cusip::from("912797JV0");
        let json = serde_json::to_string(&cusip).unwrap();
        assert_eq!(json, "\"912797JV0\"");
        let back: Cusip = serde_json::from_str(&json).unwrap();
        assert_eq!(cusip, back);
    }

    #[test]
    fn test_security_type_parse_is_case_insensitive() {
        assert_eq!(SecurityType::parse("Bill"), SecurityType::Bill);
        assert_eq!(SecurityType::parse("bill"), SecurityType::Bill);
        assert_eq!(SecurityType::parse("BILL"), SecurityType::Bill);
        assert_eq!(SecurityType::parse("note"), SecurityType::Note);
        assert_eq!(SecurityType::parse("Bond"), SecurityType::Bond);
    }

    #[test]
    fn test_security_type_unknown_token_is_undefined() {
        assert_eq!(SecurityType::parse("unknown"), SecurityType::Undefined);
        assert_eq!(SecurityType::parse(""), SecurityType::Undefined);
        assert_eq!(SecurityType::parse("CMB?"), SecurityType::Undefined);
    }

    #[test]
    fn test_security_type_deserialize_null_is_undefined() {
        let t: SecurityType = serde_json::from_str("null").unwrap();
        assert_eq!(t, SecurityType::Undefined);
        let t: SecurityType = serde_json::from_str("\"note\"").unwrap();
        assert_eq!(t, SecurityType::Note);
    }
}
