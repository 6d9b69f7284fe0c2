//! Backend entry-point: loads settings, opens the store, applies the schema,
//! and serves the REST API alongside static assets.

mod server;

use std::time::Duration;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use travel_backend::inbound::http::health::HealthState;
use travel_backend::outbound::persistence::{DbPool, PoolConfig, apply_migrations};

/// Open the store pool, falling back to a lazily connecting pool when the
/// database is unreachable so the process keeps serving.
async fn open_pool(database_url: &str) -> DbPool {
    let config = PoolConfig::new(database_url);
    match DbPool::new(config.clone()).await {
        Ok(pool) => {
            info!("connected to store");
            pool
        }
        Err(err) => {
            error!(error = %err, "store unreachable at startup; requests will fail until it recovers");
            DbPool::new_lazy(&config)
        }
    }
}

const SCHEMA_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Apply embedded migrations on a blocking thread. Failures are logged.
///
/// Returns `true` once the schema is in place.
async fn bootstrap_schema(database_url: String) -> bool {
    match tokio::task::spawn_blocking(move || apply_migrations(&database_url)).await {
        Ok(Ok(applied)) => {
            info!(applied, "schema bootstrap complete");
            true
        }
        Ok(Err(err)) => {
            error!(error = %err, "schema bootstrap failed");
            false
        }
        Err(err) => {
            error!(error = %err, "schema bootstrap task panicked");
            false
        }
    }
}

/// Keep retrying the schema bootstrap until the store accepts it.
async fn retry_schema_bootstrap(database_url: String, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        if bootstrap_schema(database_url.clone()).await {
            break;
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr()?;
    info!(
        %bind_addr,
        static_dir = %settings.static_dir().display(),
        apply_schema = settings.apply_schema(),
        "starting travel backend"
    );

    let pool = open_pool(settings.database_url()).await;
    if settings.apply_schema() && !bootstrap_schema(settings.database_url().to_owned()).await {
        warn!(
            retry_secs = SCHEMA_RETRY_INTERVAL.as_secs(),
            "schema not applied; retrying in the background"
        );
        actix_web::rt::spawn(retry_schema_bootstrap(
            settings.database_url().to_owned(),
            SCHEMA_RETRY_INTERVAL,
        ));
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool.clone()).with_static_dir(settings.static_dir());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;

    health_state.mark_unhealthy();
    drop(pool);
    info!("store connection pool closed; shutdown complete");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNREACHABLE_URL: &str = "postgres://127.0.0.1:1/unreachable";

    #[tokio::test]
    async fn bootstrap_reports_failure_for_unreachable_store() {
        assert!(!bootstrap_schema(UNREACHABLE_URL.to_owned()).await);
    }

    #[tokio::test]
    async fn retry_keeps_running_while_store_is_down() {
        let retry = tokio::spawn(retry_schema_bootstrap(
            UNREACHABLE_URL.to_owned(),
            Duration::from_millis(10),
        ));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!retry.is_finished());
        retry.abort();
    }
}
