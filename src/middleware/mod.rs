//! Middleware for request processing.
//!
//! - [`cookies`]: parses the request's cookies into the request context
//! - [`auth`]: the gate that authorizes mutating routes from the `token`
//!   cookie
//!
//! # Authentication flow
//!
//! 1. Login sets an httpOnly `token` cookie holding a signed JWT
//! 2. The cookie-extraction stage stores the parsed jar on the request
//! 3. `require_auth` / `require_seller` verify the token before the
//!    handler runs; `AuthUser` exposes the decoded claims to handlers

pub mod auth;
pub mod cookies;
