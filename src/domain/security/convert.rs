//! Conversion: SecurityResponse → TreasurySecurity.
//!
//! All the loose-typing normalization already happened during decode, so the
//! conversion is structural: wrap the identifier in its newtype and move the
//! rest across.

use super::wire::SecurityResponse;
use super::TreasurySecurity;
use crate::shared::Cusip;

impl From<SecurityResponse> for TreasurySecurity {
    fn from(source: SecurityResponse) -> Self {
        Self {
            cusip: source.cusip.map(Cusip::from),
            issue_date: source.issue_date,
            offering_amount: source.offering_amount,
            security_type: source.security_type,
            security_term: source.security_term,
            announcement_date: source.announcement_date,
            auction_date: source.auction_date,
            high_discount_rate: source.high_discount_rate,
            high_investment_rate: source.high_investment_rate,
            high_price: source.high_price,
            maturity_date: source.maturity_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SecurityType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_response() -> SecurityResponse {
        SecurityResponse {
            cusip: Some("912797JV0".to_string()),
            issue_date: NaiveDate::from_ymd_opt(2024, 4, 9),
            offering_amount: Some(70_000_000_000.0),
            security_type: SecurityType::Bill,
            security_term: Some("26-Week".to_string()),
            announcement_date: NaiveDate::from_ymd_opt(2024, 4, 4),
            auction_date: NaiveDate::from_ymd_opt(2024, 4, 8),
            high_discount_rate: Some(Decimal::from_str("5.115").unwrap()),
            high_investment_rate: Some(Decimal::from_str("5.315").unwrap()),
            high_price: Some(Decimal::from_str("97.414083").unwrap()),
            maturity_date: NaiveDate::from_ymd_opt(2024, 10, 10),
        }
    }

    #[test]
    fn test_conversion_maps_all_fields() {
        let sec: TreasurySecurity = sample_response().into();
        assert_eq!(sec.cusip, Some(Cusip::from("912797JV0")));
        assert_eq!(sec.issue_date, NaiveDate::from_ymd_opt(2024, 4, 9));
        assert_eq!(sec.offering_amount, Some(70_000_000_000.0));
        assert_eq!(sec.security_type, SecurityType::Bill);
        assert_eq!(sec.security_term.as_deref(), Some("26-Week"));
        assert_eq!(
            sec.high_investment_rate,
            Some(Decimal::from_str("5.315").unwrap())
        );
        assert_eq!(sec.maturity_date, NaiveDate::from_ymd_opt(2024, 10, 10));
    }

    #[test]
    fn test_conversion_keeps_missing_cusip_missing() {
        // Announcement listings can carry records before cusip assignment.
        let sec: TreasurySecurity = SecurityResponse::default().into();
        assert_eq!(sec.cusip, None);
        assert_eq!(sec.security_type, SecurityType::Undefined);
    }
}
