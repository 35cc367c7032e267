use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_seller;
use crate::state::AppState;

use super::controller::{is_auth_seller, login_seller, logout_seller};

pub fn init_sellers_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login_seller))
        .merge(
            Router::new()
                .route("/is-auth", get(is_auth_seller))
                .route("/logout", get(logout_seller))
                .route_layer(middleware::from_fn_with_state(state, require_seller)),
        )
}
