use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenRole, create_access_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequestDto, RegisterRequestDto, User};

pub struct UserService;

impl UserService {
    /// Creates the account and mints its first credential token.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequestDto,
        jwt_config: &JwtConfig,
    ) -> Result<(User, String), AppError> {
        let existing = sqlx::query_as::<_, User>(
            "SELECT id, name, email, cart_items FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Err(AppError::bad_request("User already exists"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, cart_items",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        let token = create_access_token(
            &user.id.to_string(),
            &user.email,
            TokenRole::Customer,
            jwt_config,
        )?;

        Ok((user, token))
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequestDto,
        jwt_config: &JwtConfig,
    ) -> Result<(User, String), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: uuid::Uuid,
            name: String,
            email: String,
            password: String,
            cart_items: serde_json::Value,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, cart_items FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = create_access_token(
            &row.id.to_string(),
            &row.email,
            TokenRole::Customer,
            jwt_config,
        )?;

        let user = User {
            id: row.id,
            name: row.name,
            email: row.email,
            cart_items: row.cart_items,
        };

        Ok((user, token))
    }
}
