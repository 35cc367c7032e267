use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// Parses the request's cookies once and stores the jar in the request
/// extensions, where later interceptors (the auth gate) read it.
pub async fn cookie_extraction(mut req: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    req.extensions_mut().insert(jar);
    next.run(req).await
}
