use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateOrderDto, Order};

/// Flat charge added on top of the item total.
const TAX_RATE: f64 = 0.02;

pub struct OrderService;

impl OrderService {
    /// Creates a cash-on-delivery order. The amount comes from the current
    /// offer prices, never from a client-supplied total.
    #[instrument(skip(db, dto))]
    pub async fn create_cod_order(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateOrderDto,
    ) -> Result<Order, AppError> {
        let mut amount = 0.0;
        for item in &dto.items {
            let offer_price =
                sqlx::query_scalar::<_, f64>("SELECT offer_price FROM products WHERE id = $1")
                    .bind(item.product_id)
                    .fetch_optional(db)
                    .await?
                    .ok_or_else(|| AppError::bad_request("Unknown product in order"))?;

            amount += offer_price * f64::from(item.quantity);
        }

        amount += amount * TAX_RATE;
        let amount = (amount * 100.0).round() / 100.0;

        let items = serde_json::to_value(&dto.items)?;

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (user_id, items, amount, address_id, payment_type)
             VALUES ($1, $2, $3, $4, 'COD')
             RETURNING id, user_id, items, amount, address_id, status, payment_type, is_paid, created_at",
        )
        .bind(user_id)
        .bind(items)
        .bind(amount)
        .bind(dto.address_id)
        .fetch_one(db)
        .await?;

        Ok(order)
    }

    #[instrument(skip(db))]
    pub async fn get_user_orders(db: &PgPool, user_id: Uuid) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, items, amount, address_id, status, payment_type, is_paid, created_at
             FROM orders
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(orders)
    }

    #[instrument(skip(db))]
    pub async fn get_all_orders(db: &PgPool) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, items, amount, address_id, status, payment_type, is_paid, created_at
             FROM orders
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(orders)
    }

    /// Marks an order paid after the provider confirms payment, then clears
    /// the buyer's cart.
    #[instrument(skip(db))]
    pub async fn confirm_paid(db: &PgPool, order_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE orders SET is_paid = TRUE WHERE id = $1")
            .bind(order_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Order not found"));
        }

        sqlx::query("UPDATE users SET cart_items = '{}'::jsonb WHERE id = $1")
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(())
    }

    /// Drops an order whose payment failed.
    #[instrument(skip(db))]
    pub async fn remove_order(db: &PgPool, order_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(db)
            .await?;

        Ok(())
    }
}
