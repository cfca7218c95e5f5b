//! Configuration file support for the Catalog dev server.
//!
//! A project may carry an optional configuration file next to its
//! `package.json`. This crate owns the on-disk schema ([`CatalogConfig`]),
//! locating and parsing the file ([`ConfigDiscovery`]) and the JSON merge used
//! to apply the file's bundler override ([`merge_values`]).

pub mod config;
pub mod discovery;
pub mod error;
pub mod validation;

pub use config::{merge_values, CatalogConfig};
pub use discovery::{discover, ConfigDiscovery, DiscoveredConfig, CONFIG_FILE_NAMES};
pub use error::{ConfigError, Result};
