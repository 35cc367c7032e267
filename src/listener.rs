use std::io;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::warn;

/// A successfully bound listener and the port it landed on: the configured
/// port, or its fallback.
#[derive(Debug)]
pub struct BoundListener {
    pub listener: TcpListener,
    pub port: u16,
}

/// Binds the configured port, retrying exactly once on the next port when
/// the first is taken. A second conflict, or any other bind error, is
/// fatal to startup.
pub async fn bind_with_fallback(port: u16) -> anyhow::Result<BoundListener> {
    match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => Ok(BoundListener { listener, port }),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            let fallback = port
                .checked_add(1)
                .context("configured port has no fallback port")?;

            warn!(port, fallback, "port already in use, retrying on next port");

            let listener = TcpListener::bind(("0.0.0.0", fallback))
                .await
                .with_context(|| format!("failed to bind fallback port {fallback}"))?;

            Ok(BoundListener {
                listener,
                port: fallback,
            })
        }
        Err(e) => Err(e).with_context(|| format!("failed to bind port {port}")),
    }
}
