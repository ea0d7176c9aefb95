//! HTTP layer — `TreasuryDirectHttp` with three-state response classification.

pub mod client;

pub use client::{FetchOutcome, TreasuryDirectHttp, DEFAULT_TIMEOUT, NO_DATA_SENTINEL};
