#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Environment telemetry extraction from network device CLI output.
//!
//! Turns the human-oriented `show environment` text of a device into typed
//! temperature, power-supply and power-usage records.

pub mod dialect;
pub mod error;
pub mod health;
pub mod item;
pub mod parser;
pub mod registry;
pub mod summary;

pub use dialect::Dialect;
pub use error::{Error, Result};
pub use item::{EnvironmentItem, Reading, RecordKind};
pub use parser::{parse, parse_dialect, parse_with};
pub use registry::{DialectPatterns, PatternRegistry};
pub use summary::Summary;
