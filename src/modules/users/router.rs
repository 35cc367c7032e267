use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{is_auth, login_user, logout_user, register_user};

pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .merge(
            Router::new()
                .route("/is-auth", get(is_auth))
                .route("/logout", get(logout_user))
                .route_layer(middleware::from_fn_with_state(state, require_auth)),
        )
}
