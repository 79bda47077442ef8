//! Configuration file for the `envparse` command line tool.

mod schema;

pub use schema::{Config, DefaultsConfig, LoggingConfig, OutputFormat};
