//! # Greencart API
//!
//! An e-commerce REST backend built with Rust, Axum, and PostgreSQL:
//! customer and seller accounts, a product catalog, per-user carts and
//! addresses, and orders paid in cash or confirmed through a payment
//! provider's webhook.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Environment configuration (JWT, CORS, database, media, ...)
//! ├── middleware/       # Cookie extraction and the auth gate
//! ├── modules/          # Feature modules
//! │   ├── users/        # Registration, login, identity echo
//! │   ├── sellers/      # The configured seller account
//! │   ├── products/     # Catalog and stock management
//! │   ├── cart/         # Per-user cart document
//! │   ├── addresses/    # Shipping addresses
//! │   └── orders/       # COD orders and the payment webhook
//! ├── pipeline.rs       # Declared interceptor chain + ordering invariant
//! ├── router.rs         # Pipeline composer
//! ├── listener.rs       # Port binding with single-port fallback
//! └── utils/            # Errors, JWT, passwords, webhook signatures
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs`
//! (HTTP handlers), `service.rs` (business logic), `model.rs` (DTOs and
//! row types), `router.rs` (route wiring).
//!
//! ## Request pipeline
//!
//! Every request passes the same interceptor chain: raw-body capture for
//! the payment webhook, JSON parsing for the API groups, cookie
//! extraction, then the cross-origin policy. The chain's order is checked
//! when the router is built — the webhook must see the provider's exact
//! bytes or its signature verification fails.
//!
//! ## Authentication
//!
//! Logging in sets an httpOnly `token` cookie holding an HS256 JWT. Gated
//! routes verify it with the [`middleware::auth`] gate; seller-only routes
//! additionally require the `seller` role claim.

pub mod config;
pub mod listener;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod pipeline;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
