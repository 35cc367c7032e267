use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use crate::middleware::auth::{AuthUser, auth_cookie, expired_auth_cookie};
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{SellerLoginRequestDto, SellerProfileResponse};
use super::service::SellerService;

/// Log the configured seller in and set the credential cookie.
#[instrument(skip(state, jar, dto))]
pub async fn login_seller(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SellerLoginRequestDto>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let token = SellerService::login_seller(&dto, &state.seller_config, &state.jwt_config)?;

    Ok((
        jar.add(auth_cookie(token)),
        Json(MessageResponse {
            message: "Logged In".to_string(),
        }),
    ))
}

/// Echo the seller identity the auth gate attached.
#[instrument(skip(auth_user))]
pub async fn is_auth_seller(auth_user: AuthUser) -> Json<SellerProfileResponse> {
    Json(SellerProfileResponse {
        email: auth_user.0.email,
        role: auth_user.0.role,
    })
}

/// Clear the credential cookie.
#[instrument(skip(jar))]
pub async fn logout_seller(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.remove(expired_auth_cookie()),
        Json(MessageResponse {
            message: "Logged Out".to_string(),
        }),
    )
}
