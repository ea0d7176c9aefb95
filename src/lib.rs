//! # TreasuryDirect SDK
//!
//! A Rust client for the public TreasuryDirect securities REST API
//! (`https://www.treasurydirect.gov/TA_WS`).
//!
//! The upstream API is schema-loose: numbers arrive as strings, enum tokens
//! arrive in inconsistent casing, and "nothing matched" is signaled by a 200
//! response whose body is the literal text `No data`. This crate normalizes
//! all of that into a strongly-typed, nullable-aware domain model.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, error types
//! 2. **HTTP** — `TreasuryDirectHttp`: one GET per endpoint, three-state
//!    outcome (body / no-data sentinel / transport error)
//! 3. **High-Level Client** — `TreasuryDirectClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use treasurydirect_sdk::prelude::*;
//! use chrono::NaiveDate;
//!
//! let client = TreasuryDirectClient::builder().build()?;
//!
//! let cusip = Cusip::from("912797JV0");
//! let issue_date = NaiveDate::from_ymd_opt(2024, 4, 9).unwrap();
//!
//! let security = client.securities().details(&cusip, issue_date).await?;
//! let auctioned = client.securities().auctioned(7).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP client with no-data sentinel classification.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TreasuryDirectClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Cusip, SecurityType};

    // Domain types
    pub use crate::domain::security::TreasurySecurity;

    // Errors
    pub use crate::error::{DecodeError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP layer
    pub use crate::http::{FetchOutcome, TreasuryDirectHttp};

    // Client + sub-clients
    pub use crate::client::{SecuritiesClient, TreasuryDirectClient, TreasuryDirectClientBuilder};
}
