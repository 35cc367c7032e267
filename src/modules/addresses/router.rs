use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{add_address, get_addresses};

pub fn init_addresses_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/add", post(add_address))
        .route("/get", get(get_addresses))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
