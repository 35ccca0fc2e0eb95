//! Tactica Shared - the scenario file format.
//!
//! Scenario files are JSON documents written by the editor and read by the
//! player. This crate converts between a parsed document
//! ([`serde_json::Value`]) and the domain [`Scenario`](tactica_domain::Scenario).
//! Reading bytes from disk and parsing them is left to the caller.
//!
//! - [`wire`] - field names and the `move_N` key scheme
//! - [`decode`] - tolerant reader with optional warnings report
//! - [`encode`] - deterministic writer

pub mod decode;
pub mod encode;
pub mod error;
pub mod wire;

pub use decode::{
    decode, DecodeOptions, DecodeWarning, Decoded, Decoder, GapPolicy, DEFAULT_MAX_MOVE_POINTS,
    LEGACY_MAX_MOVE_POINTS,
};
pub use encode::{encode, encode_to_string};
pub use error::{SchemaError, UnknownGapPolicy};
