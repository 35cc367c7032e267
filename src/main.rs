use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use greencart::config::server::ServerConfig;
use greencart::listener::bind_with_fallback;
use greencart::router::init_router;
use greencart::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database and collaborator configuration must all be good before a
    // listener exists.
    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!("startup failed: {e:#}");
            std::process::exit(1);
        }
    };

    let app = match init_router(state) {
        Ok(app) => app,
        Err(e) => {
            error!("invalid pipeline configuration: {e}");
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::from_env();
    let bound = match bind_with_fallback(server_config.port).await {
        Ok(bound) => bound,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };

    info!("Server is running on http://localhost:{}", bound.port);

    if let Err(e) = axum::serve(bound.listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
