use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: serde_json::Value,
    pub amount: f64,
    pub address_id: Uuid,
    pub status: String,
    pub payment_type: String,
    pub is_paid: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderDto {
    #[validate(length(min = 1, message = "order must contain at least one item"))]
    pub items: Vec<OrderItem>,
    pub address_id: Uuid,
}

/// Acknowledgement body returned to the payment provider.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// Subset of the provider's event envelope the webhook acts on.
#[derive(Debug, Deserialize)]
pub struct StripeEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: StripeEventObject,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventObject {
    #[serde(default)]
    pub metadata: StripeMetadata,
}

/// Order linkage the checkout flow stores on the payment intent.
#[derive(Debug, Default, Deserialize)]
pub struct StripeMetadata {
    pub order_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}
