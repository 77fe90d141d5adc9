//! Sentinel API Server Entry Point
//!
//! Bootstraps configuration, constructs the store, queue, and collaborator
//! providers, spawns the worker pool, and starts the Axum HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use sentinel_api::{
    create_api_router, init_telemetry, ApiConfig, ApiError, ApiResult, AppState, ProviderConfig,
    ProviderMode, StorageBackend, StorageConfig, TelemetryConfig,
};
use sentinel_core::AgentKind;
use sentinel_llm::{
    GeminiClient, GeminiSynthesisProvider, MockRetrievalProvider, MockSynthesisProvider,
    RetrievalProvider, SynthesisProvider, WeaviateClient, WeaviateRetrievalProvider,
};
use sentinel_queue::MemoryTaskQueue;
use sentinel_storage::{InvestigationStore, LmdbInvestigationStore, MemoryInvestigationStore};
use sentinel_worker::{run_worker, Dispatcher, LogAnalystAgent, WorkerContext, WorkerMetrics};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_telemetry(&TelemetryConfig::default())?;

    let api_config = ApiConfig::from_env();
    let storage_config = StorageConfig::from_env();
    let provider_config = ProviderConfig::from_env();

    let store = build_store(&storage_config)?;
    let (retrieval, synthesis) = build_providers(&provider_config)?;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        AgentKind::LogAnalyst,
        Arc::new(LogAnalystAgent::new(retrieval, synthesis)),
    );

    let (queue, receiver) = MemoryTaskQueue::channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ctx = WorkerContext {
        store: store.clone(),
        dispatcher: Arc::new(dispatcher),
        metrics: Arc::new(WorkerMetrics::new()),
    };

    let mut workers = Vec::with_capacity(api_config.worker_count);
    for _ in 0..api_config.worker_count {
        workers.push(tokio::spawn(run_worker(
            ctx.clone(),
            receiver.clone(),
            shutdown_rx.clone(),
        )));
    }

    let state = AppState::new(store, Arc::new(queue));
    let app = create_api_router(state, &api_config);

    let addr = resolve_bind_addr()?;
    tracing::info!(
        %addr,
        worker_count = api_config.worker_count,
        "Starting Sentinel API server"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    let _ = shutdown_tx.send(true);
    for worker in workers {
        let _ = worker.await;
    }

    Ok(())
}

fn build_store(config: &StorageConfig) -> ApiResult<Arc<dyn InvestigationStore>> {
    match &config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory investigation store");
            Ok(Arc::new(MemoryInvestigationStore::new()))
        }
        StorageBackend::Lmdb { path, max_size_mb } => {
            tracing::info!(path = %path.display(), max_size_mb, "Using LMDB investigation store");
            let store = LmdbInvestigationStore::new(path, *max_size_mb).map_err(|e| {
                ApiError::internal_error(format!("Failed to open LMDB store: {}", e))
            })?;
            Ok(Arc::new(store))
        }
    }
}

fn build_providers(
    config: &ProviderConfig,
) -> ApiResult<(Arc<dyn RetrievalProvider>, Arc<dyn SynthesisProvider>)> {
    match config.mode {
        ProviderMode::Mock => {
            tracing::warn!("Using mock collaborator providers, summaries are canned");
            Ok((
                Arc::new(MockRetrievalProvider::empty()),
                Arc::new(MockSynthesisProvider::new()),
            ))
        }
        ProviderMode::Live => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                ApiError::invalid_input(
                    "SENTINEL_GEMINI_API_KEY is required when SENTINEL_PROVIDERS=live",
                )
            })?;

            let retrieval = WeaviateRetrievalProvider::new(
                WeaviateClient::new(config.weaviate_url.as_str()),
                config.search_limit,
            );
            let synthesis = GeminiSynthesisProvider::new(
                GeminiClient::new(api_key),
                config.gemini_model.as_str(),
            );

            Ok((Arc::new(retrieval), Arc::new(synthesis)))
        }
    }
}

fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("SENTINEL_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("SENTINEL_API_PORT").ok())
        .unwrap_or_else(|| "3000".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
