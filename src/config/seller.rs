use std::env;

use super::ConfigError;

/// The single seller account, held in configuration rather than the
/// database.
#[derive(Clone, Debug)]
pub struct SellerConfig {
    pub email: String,
    pub password: String,
}

impl SellerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            email: env::var("SELLER_EMAIL").map_err(|_| ConfigError::Missing("SELLER_EMAIL"))?,
            password: env::var("SELLER_PASSWORD")
                .map_err(|_| ConfigError::Missing("SELLER_PASSWORD"))?,
        })
    }
}
