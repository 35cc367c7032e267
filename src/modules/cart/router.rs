use axum::{Router, middleware, routing::post};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::update_cart;

pub fn init_cart_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/update", post(update_cart))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
