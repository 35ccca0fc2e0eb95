//! Common utility functions shared across the Tactica crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{empty_if_none, none_if_empty};
