//! Common utility functions shared across the domain and engine crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::{format_iso_millis, serialize_iso_millis};
