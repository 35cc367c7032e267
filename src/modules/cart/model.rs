use serde::Deserialize;

/// Replacement cart contents: an opaque product-id → quantity object.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartDto {
    pub cart_items: serde_json::Value,
}
