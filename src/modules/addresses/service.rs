use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Address, CreateAddressDto};

pub struct AddressService;

impl AddressService {
    #[instrument(skip(db, dto))]
    pub async fn add_address(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateAddressDto,
    ) -> Result<Address, AppError> {
        let address = sqlx::query_as::<_, Address>(
            "INSERT INTO addresses
                 (user_id, first_name, last_name, email, street, city, state, zipcode, country, phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, user_id, first_name, last_name, email, street, city, state, zipcode, country, phone",
        )
        .bind(user_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.street)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(&dto.zipcode)
        .bind(&dto.country)
        .bind(&dto.phone)
        .fetch_one(db)
        .await?;

        Ok(address)
    }

    #[instrument(skip(db))]
    pub async fn get_addresses(db: &PgPool, user_id: Uuid) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, user_id, first_name, last_name, email, street, city, state, zipcode, country, phone
             FROM addresses
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(addresses)
    }
}
