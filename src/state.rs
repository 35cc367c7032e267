use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::media::MediaConfig;
use crate::config::seller::SellerConfig;
use crate::config::stripe::StripeConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub media_config: MediaConfig,
    pub seller_config: SellerConfig,
    pub stripe_config: StripeConfig,
}

/// Builds the shared state in startup order: the database connection and
/// the collaborator configuration must all succeed before any listener
/// binds.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool().await?;
    let media_config = MediaConfig::from_env()?;

    Ok(AppState {
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        media_config,
        seller_config: SellerConfig::from_env()?,
        stripe_config: StripeConfig::from_env()?,
    })
}
