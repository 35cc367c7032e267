use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::UpdateCartDto;
use super::service::CartService;

/// Replace the caller's cart contents.
#[instrument(skip(state, auth_user, dto))]
pub async fn update_cart(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<UpdateCartDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;

    CartService::update_cart(&state.db, user_id, dto.cart_items).await?;

    Ok(Json(MessageResponse {
        message: "Cart Updated".to_string(),
    }))
}
