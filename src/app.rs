/*
 * Responsibility
 * - Load Config → build dependencies → assemble the Router
 * - Apply cross-cutting middleware (CORS / HTTP layers)
 * - Start axum::serve() with graceful shutdown
 */
use std::{panic, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::{Executor, postgres::PgPoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware::{cors, http},
    services::identity::SupabaseIdentityProvider,
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=info,activity_tracker_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched
        tracing::error!(%info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    init_panic_hook();

    let config = Config::from_env().context("loading configuration")?;

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let statement_timeout_ms = config.upstream_timeout.as_millis();

    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.upstream_timeout)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                conn.execute(format!("SET statement_timeout = {statement_timeout_ms}").as_str())
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .context("connecting to database")?;

    let identity = SupabaseIdentityProvider::new(
        &config.supabase_url,
        config.supabase_api_key.clone(),
        config.upstream_timeout,
    )
    .context("building identity client")?;

    Ok(AppState::with_postgres(Arc::new(identity), db))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = api::routes(&state).with_state(state);
    let router = cors::apply(router, config);
    http::apply(router, config.request_timeout)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
