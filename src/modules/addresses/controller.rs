use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Address, CreateAddressDto};
use super::service::AddressService;

/// Store a shipping address for the caller.
#[instrument(skip(state, auth_user, dto))]
pub async fn add_address(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAddressDto>,
) -> Result<(StatusCode, Json<Address>), AppError> {
    let user_id = auth_user.user_id()?;
    let address = AddressService::add_address(&state.db, user_id, dto).await?;

    Ok((StatusCode::CREATED, Json(address)))
}

/// List the caller's addresses.
#[instrument(skip(state, auth_user))]
pub async fn get_addresses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Address>>, AppError> {
    let user_id = auth_user.user_id()?;
    let addresses = AddressService::get_addresses(&state.db, user_id).await?;

    Ok(Json(addresses))
}
