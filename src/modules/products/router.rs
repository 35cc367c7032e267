use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_seller;
use crate::state::AppState;

use super::controller::{add_product, get_product, list_products, update_stock};

pub fn init_products_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/list", get(list_products))
        .route("/{id}", get(get_product))
        .merge(
            Router::new()
                .route("/add", post(add_product))
                .route("/stock", post(update_stock))
                .route_layer(middleware::from_fn_with_state(state, require_seller)),
        )
}
