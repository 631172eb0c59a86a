//! Configuration module for the harvester
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every value has a default matching the stock site.
//!
//! # Example
//!
//! ```no_run
//! use listing_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvester.toml")).unwrap();
//! println!("Harvesting from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, PaginationConfig, SelectorConfig, SiteConfig, DEFAULT_BASE_URL,
};

// Re-export parser functions
pub use parser::{config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
pub(crate) use validation::validate_selector;
