use std::env;

use super::ConfigError;

/// Payment-provider settings; the webhook secret verifies inbound event
/// signatures.
#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub webhook_secret: String,
}

impl StripeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            webhook_secret: env::var("STRIPE_WEBHOOK_SECRET")
                .map_err(|_| ConfigError::Missing("STRIPE_WEBHOOK_SECRET"))?,
        })
    }
}
