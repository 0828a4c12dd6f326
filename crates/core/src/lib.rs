//! cs-core: Core library for the csutil cloud storage CLI
//!
//! This crate provides the core functionality for the cs CLI, including:
//! - Configuration management (provider/API selection)
//! - Help topic registration and lookup
//!
//! This crate is designed to be independent of any specific storage SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod config;
pub mod error;
pub mod help;

pub use config::{Config, ConfigManager, ProviderConfig};
pub use error::{Error, Result};
pub use help::{HelpRegistry, HelpTopic};
