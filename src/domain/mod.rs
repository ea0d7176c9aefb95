//! Domain modules (vertical slices).
//!
//! Each domain keeps its wire types (what the API actually sends), its
//! normalized domain types, the conversions between them, and its sub-client.

pub mod security;
