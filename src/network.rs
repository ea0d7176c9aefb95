//! Network constants for the TreasuryDirect SDK.

/// Default REST API base URL (no trailing slash).
pub const DEFAULT_API_URL: &str = "https://www.treasurydirect.gov/TA_WS";
