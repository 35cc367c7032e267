use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;

/// Who a credential token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRole {
    Customer,
    Seller,
}

/// Claims embedded in a credential token. Immutable once decoded; attached
/// to a request for that request's lifetime only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: TokenRole,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_access_token(
    sub: &str,
    email: &str,
    role: TokenRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        role,
        exp: (now + jwt_config.token_expiry) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("failed to create token: {e}")))
}

/// Verifies signature and expiry, returning the decoded claims. Any failure
/// collapses into one unauthorized outcome; the token itself is never
/// altered, so verifying twice yields the same claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Not Authorized, token invalid"))
}
