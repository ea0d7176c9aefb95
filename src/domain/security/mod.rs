//! Security domain — Treasury security issuance, auction, and announcement
//! records.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Cusip, SecurityType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A normalized Treasury security record.
///
/// Constructed fresh from each decoded response; never cached or mutated
/// afterwards. Every optional field is genuinely optional upstream — an
/// announced security, for example, has no auction results yet.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TreasurySecurity {
    /// Identifier of the issuance. Always present on single-security lookups;
    /// may be absent in announcement listings.
    pub cusip: Option<Cusip>,
    pub issue_date: Option<NaiveDate>,
    pub offering_amount: Option<f64>,
    pub security_type: SecurityType,
    /// Term label as the upstream reports it (e.g. `"26-Week"`, `"10-Year"`).
    pub security_term: Option<String>,
    pub announcement_date: Option<NaiveDate>,
    pub auction_date: Option<NaiveDate>,
    pub high_discount_rate: Option<Decimal>,
    pub high_investment_rate: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub maturity_date: Option<NaiveDate>,
}
