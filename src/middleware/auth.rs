use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{Claims, TokenRole, verify_token};

/// Name of the credential cookie written at login. The gate reads no other
/// cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Extractor that checks the credential cookie is present, verifies it,
/// and exposes the decoded claims to the handler.
///
/// Presence is checked before verification: a missing cookie rejects
/// without touching the signing key. The gate attaches claims or
/// short-circuits; it never mutates the token and keeps no state across
/// requests.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The authenticated user's id. Seller tokens carry an email subject
    /// and fail this parse.
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Not Authorized, token invalid"))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn is_seller(&self) -> bool {
        self.0.role == TokenRole::Seller
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Jar populated by the cookie-extraction stage; parsed from the
        // headers when the extractor runs outside the standard chain.
        let jar = parts
            .extensions
            .get::<CookieJar>()
            .cloned()
            .unwrap_or_else(|| CookieJar::from_headers(&parts.headers));

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthorized("Not Authorized, token missing"))?;

        let claims = verify_token(&token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Gate for routes any authenticated caller may use.
///
/// ```rust,ignore
/// Router::new()
///     .route("/is-auth", get(is_auth))
///     .route_layer(middleware::from_fn_with_state(state, require_auth));
/// ```
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match authenticate(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

/// Gate for seller-only routes: authentication plus the seller role.
pub async fn require_seller(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match authenticate(&state, req).await {
        Ok(req) => {
            let authorized = req
                .extensions()
                .get::<AuthUser>()
                .is_some_and(|user| user.is_seller());

            if !authorized {
                return AppError::forbidden("Seller account required").into_response();
            }

            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

async fn authenticate(state: &AppState, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, state).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user);
    Ok(req)
}

/// The httpOnly credential cookie set at login.
pub fn auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Removal counterpart used at logout.
pub fn expired_auth_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: TokenRole) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "test@example.com".to_string(),
            role,
            exp: 9_999_999_999,
            iat: 1_234_567_890,
        }
    }

    #[test]
    fn user_id_parses_uuid_subject() {
        let id = uuid::Uuid::new_v4();
        let auth_user = AuthUser(claims(&id.to_string(), TokenRole::Customer));

        assert_eq!(auth_user.user_id().unwrap(), id);
    }

    #[test]
    fn user_id_rejects_non_uuid_subject() {
        let auth_user = AuthUser(claims("seller@example.com", TokenRole::Seller));

        assert!(auth_user.user_id().is_err());
    }

    #[test]
    fn seller_role_is_detected() {
        assert!(AuthUser(claims("s", TokenRole::Seller)).is_seller());
        assert!(!AuthUser(claims("c", TokenRole::Customer)).is_seller());
    }

    #[test]
    fn auth_cookie_is_http_only() {
        let cookie = auth_cookie("abc".to_string());

        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
