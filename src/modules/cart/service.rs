use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

pub struct CartService;

impl CartService {
    /// Replaces the caller's cart document wholesale.
    #[instrument(skip(db, cart_items))]
    pub async fn update_cart(
        db: &PgPool,
        user_id: Uuid,
        cart_items: serde_json::Value,
    ) -> Result<(), AppError> {
        if !cart_items.is_object() {
            return Err(AppError::bad_request("cart_items must be an object"));
        }

        let result = sqlx::query("UPDATE users SET cart_items = $1 WHERE id = $2")
            .bind(cart_items)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }
}
