use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::{info, instrument, warn};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::webhook::verify_signature;
use crate::validator::ValidatedJson;

use super::model::{CreateOrderDto, Order, StripeEvent, WebhookAck};
use super::service::OrderService;

/// Place a cash-on-delivery order.
#[instrument(skip(state, auth_user, dto))]
pub async fn create_cod_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let user_id = auth_user.user_id()?;
    let order = OrderService::create_cod_order(&state.db, user_id, dto).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// The caller's orders, newest first.
#[instrument(skip(state, auth_user))]
pub async fn get_user_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Order>>, AppError> {
    let user_id = auth_user.user_id()?;
    let orders = OrderService::get_user_orders(&state.db, user_id).await?;

    Ok(Json(orders))
}

/// Every order in the system (seller only).
#[instrument(skip(state))]
pub async fn get_seller_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = OrderService::get_all_orders(&state.db).await?;

    Ok(Json(orders))
}

/// Payment-provider webhook.
///
/// Takes the raw request bytes so the signature is checked against exactly
/// what the provider signed; this route must never sit behind a JSON body
/// interceptor.
#[instrument(skip(state, headers, body))]
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, AppError> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::bad_request("Missing Stripe-Signature header"))?;

    verify_signature(&body, signature, &state.stripe_config.webhook_secret)
        .map_err(|e| AppError::bad_request(format!("Webhook signature verification failed: {e}")))?;

    let event: StripeEvent = serde_json::from_slice(&body)
        .map_err(|_| AppError::bad_request("Malformed webhook payload"))?;

    match event.event_type.as_str() {
        "payment_intent.succeeded" => {
            let metadata = event.data.object.metadata;
            let (Some(order_id), Some(user_id)) = (metadata.order_id, metadata.user_id) else {
                return Err(AppError::bad_request("Event metadata missing order linkage"));
            };

            OrderService::confirm_paid(&state.db, order_id, user_id).await?;
            info!(%order_id, "order marked paid");
        }
        "payment_intent.payment_failed" => {
            if let Some(order_id) = event.data.object.metadata.order_id {
                OrderService::remove_order(&state.db, order_id).await?;
                warn!(%order_id, "order removed after failed payment");
            }
        }
        other => {
            info!(event_type = %other, "ignoring unhandled webhook event");
        }
    }

    Ok(Json(WebhookAck { received: true }))
}
