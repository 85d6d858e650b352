// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, process, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relational_auth_server::{
    api::router,
    auth::SecretKey,
    config::{HOST_ENV, LOG_FORMAT_ENV, PORT_ENV},
    credentials::{CredentialStore, StaticCredentials},
    state::AppState,
};

#[tokio::main]
async fn main() {
    init_tracing();

    // Startup precondition: no request can be safely served without the key,
    // so a bad key halts the process instead of degrading into runtime errors.
    let key = SecretKey::load().unwrap_or_else(|err| {
        tracing::error!(%err, "cannot start without a valid token key");
        process::exit(1);
    });

    let credentials: Arc<dyn CredentialStore> = match StaticCredentials::from_env() {
        Some(seeded) => Arc::new(seeded),
        None => {
            tracing::warn!("no seed credentials configured; /v1/login will reject every attempt");
            Arc::new(StaticCredentials::new("", ""))
        }
    };

    let state = AppState::new(key, credentials);
    let app = router(state);

    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!("Relational Auth server listening on http://{addr} (docs at /docs)");

    let listener = TcpListener::bind(addr).await.expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());

    let json = env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
