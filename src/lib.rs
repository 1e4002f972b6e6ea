//! Client library and command-line tool for the Pivnet product distribution API.
//!
//! The library half is [`PivnetClient`]: a thin async client with one
//! sub-client per resource kind (products, releases, EULAs, product files,
//! file groups, release types, release upgrade paths and user groups). Every
//! call maps to exactly one HTTP request, declares the status code it
//! expects and fails with [`ApiError`] on anything else.
//!
//! The command-line half lives in `commands` (argument definitions),
//! `actions` (handlers) and `cli` (dispatch).
//!
//! # Modules
//!
//! - `pivnet`: resource clients and the API error type
//! - `http_utils`: transport shared by all resource clients
//! - `model`: entities and response envelopes
//! - `format`: text, JSON, YAML and CSV rendering
//! - `configuration`: the optional configuration file
//! - `resolution_utils`: resolving versions and names to entities

pub mod actions;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod model;
pub mod param_utils;
pub mod pivnet;
pub mod resolution_utils;

pub use http_utils::ClientConfig;
pub use pivnet::{ApiError, PivnetClient};

/// Version reported by `--version` and in the default user agent.
///
/// Release builds set `PIVNET_VERSION` at compile time.
pub const VERSION: &str = match option_env!("PIVNET_VERSION") {
    Some(version) => version,
    None => "dev",
};
