//! Lumimask builds, queries and pretty-prints run/lumi-section masks.

/// Error type for reading masks and listings.
pub mod error;

/// Pretty-printing of lumi masks.
pub mod formatting;

/// The run -> lumi ranges map and the range type.
pub mod lumi_map;

/// Compressing lumi numbers into ranges.
pub mod ranges;

/// Parsing run/lumi listings and merging them into a mask.
pub mod run_lumis;

/// Opening (optionally gzipped) input.
pub mod sniff;

/// String helpers for datasets, releases and error responses.
pub mod utils;

pub use error::LumiError;
pub use formatting::{stringify_lumis, wrap_tokens};
pub use lumi_map::{LumiMap, LumiRange};
