use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Vec<String>,
    pub price: f64,
    pub offer_price: f64,
    pub images: Vec<String>,
    pub category: String,
    pub in_stock: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Images may be absolute URLs or media-collaborator public ids; the
/// service resolves the latter before storing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub offer_price: f64,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockDto {
    pub id: Uuid,
    pub in_stock: bool,
}
