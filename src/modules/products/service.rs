use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::media::MediaConfig;
use crate::utils::errors::AppError;

use super::model::{CreateProductDto, Product};

pub struct ProductService;

impl ProductService {
    /// Inserts a product, resolving image references through the media
    /// collaborator's delivery URL.
    #[instrument(skip(db, dto, media_config))]
    pub async fn add_product(
        db: &PgPool,
        dto: CreateProductDto,
        media_config: &MediaConfig,
    ) -> Result<Product, AppError> {
        let images: Vec<String> = dto
            .images
            .iter()
            .map(|image| media_config.delivery_url(image))
            .collect();

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, offer_price, images, category)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, description, price, offer_price, images, category, in_stock, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.offer_price)
        .bind(&images)
        .bind(&dto.category)
        .fetch_one(db)
        .await?;

        Ok(product)
    }

    #[instrument(skip(db))]
    pub async fn list_products(db: &PgPool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, offer_price, images, category, in_stock, created_at
             FROM products
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(products)
    }

    #[instrument(skip(db))]
    pub async fn get_product(db: &PgPool, id: Uuid) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, offer_price, images, category, in_stock, created_at
             FROM products
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

        Ok(product)
    }

    #[instrument(skip(db))]
    pub async fn update_stock(db: &PgPool, id: Uuid, in_stock: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE products SET in_stock = $1 WHERE id = $2")
            .bind(in_stock)
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found"));
        }

        Ok(())
    }
}
