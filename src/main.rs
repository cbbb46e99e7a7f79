use std::error::Error;
use std::sync::Arc;

use tariff_sync::http::{self, AppState};
use tariff_sync::{AppConfig, HttpRemoteSource, SyncService, SyncWorkerThread, TariffStore};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
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

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env();
    init_tracing(config.log_json);

    if config.api_key.is_none() {
        warn!("no api key configured; every protected request will be rejected");
    }

    let store = TariffStore::new();

    // The blocking client is built here, before any runtime exists, and is
    // only used on the worker thread.
    let worker = if config.sync.enabled {
        let source = HttpRemoteSource::new(&config.sync.remote_url, config.sync.fetch_timeout)?;
        info!(
            remote = source.url(),
            interval_secs = config.sync.interval.as_secs(),
            "starting tariff sync worker"
        );
        let service = Arc::new(SyncService::new(source, store.clone()));
        Some(SyncWorkerThread::spawn(
            service,
            config.sync.initial_delay,
            config.sync.interval,
        ))
    } else {
        info!("tariff sync disabled");
        None
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let served = runtime.block_on(http::serve(
        AppState::new(store, config.api_key.clone()),
        &config.bind,
        shutdown_signal(),
    ));

    if let Some(worker) = worker {
        let stats = worker.stop();
        info!(
            cycles = stats.cycles,
            failed = stats.failed_cycles,
            inserted = stats.inserted,
            updated = stats.updated,
            "tariff sync totals"
        );
    }

    served?;
    Ok(())
}
