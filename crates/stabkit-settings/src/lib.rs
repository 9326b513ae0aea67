//! Stabkit Settings Crate
//!
//! Handles the converter's configuration file: what to extract from a
//! drawing, how the stab press moves, and what the emitted program contains.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
