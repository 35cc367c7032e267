//! Configuration modules for the greencart API.
//!
//! Each submodule handles one concern, loaded from environment variables:
//!
//! - [`cors`]: cross-origin policy (allow-list or permissive)
//! - [`database`]: PostgreSQL pool initialization and migrations
//! - [`jwt`]: credential-token signing settings
//! - [`media`]: media-upload collaborator settings
//! - [`seller`]: the configured seller account
//! - [`server`]: listen port
//! - [`stripe`]: payment-webhook signature secret
//!
//! Required settings that are missing or unparseable surface as a
//! [`ConfigError`], which is fatal during startup.

use std::fmt;

pub mod cors;
pub mod database;
pub mod jwt;
pub mod media;
pub mod seller;
pub mod server;
pub mod stripe;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {key}"),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {key}"),
        }
    }
}

impl std::error::Error for ConfigError {}
