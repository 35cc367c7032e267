use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::{require_auth, require_seller};
use crate::state::AppState;

use super::controller::{create_cod_order, get_seller_orders, get_user_orders};

/// Order routes. The payment webhook is intentionally absent: the pipeline
/// composer mounts it at the root, ahead of the JSON route groups.
pub fn init_orders_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(
            Router::new()
                .route("/cod", post(create_cod_order))
                .route("/user", get(get_user_orders))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .merge(
            Router::new()
                .route("/seller", get(get_seller_orders))
                .route_layer(middleware::from_fn_with_state(state, require_seller)),
        )
}
