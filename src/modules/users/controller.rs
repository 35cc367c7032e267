use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use crate::middleware::auth::{AuthUser, auth_cookie, expired_auth_cookie};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    LoginRequestDto, MessageResponse, ProfileResponse, RegisterRequestDto, User,
};
use super::service::UserService;

/// Create an account and set the credential cookie.
#[instrument(skip(state, jar, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<RegisterRequestDto>,
) -> Result<(StatusCode, CookieJar, Json<User>), AppError> {
    let (user, token) = UserService::register_user(&state.db, dto, &state.jwt_config).await?;

    Ok((StatusCode::CREATED, jar.add(auth_cookie(token)), Json(user)))
}

/// Verify credentials and set the credential cookie.
#[instrument(skip(state, jar, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequestDto>,
) -> Result<(CookieJar, Json<User>), AppError> {
    let (user, token) = UserService::login_user(&state.db, dto, &state.jwt_config).await?;

    Ok((jar.add(auth_cookie(token)), Json(user)))
}

/// Echo the identity claim the auth gate attached.
#[instrument(skip(auth_user))]
pub async fn is_auth(auth_user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: auth_user.0.sub,
        email: auth_user.0.email,
        role: auth_user.0.role,
    })
}

/// Clear the credential cookie.
#[instrument(skip(jar))]
pub async fn logout_user(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.remove(expired_auth_cookie()),
        Json(MessageResponse {
            message: "Logged Out".to_string(),
        }),
    )
}
