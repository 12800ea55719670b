use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod models;
mod state;

use mostra_core::{Settings, WorkStore};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load();

    // First run: fetch the document and build the record file before
    // serving. A failed initialization is logged, not fatal: the catalog
    // is simply empty until an `init` succeeds.
    if !settings.records_path.exists() {
        tracing::info!(
            path = %settings.records_path.display(),
            "record file missing, initializing dataset"
        );
        let client = reqwest::Client::new();
        match mostra_ingest::initialize_dataset(
            &client,
            &settings.document_url,
            &settings.document_path,
            &settings.records_path,
        )
        .await
        {
            Ok(works) => tracing::info!(records = works.len(), "dataset initialized"),
            Err(e) => {
                tracing::warn!(error = %e, "dataset initialization failed, serving an empty catalog")
            }
        }
    }

    let state = Arc::new(AppState {
        store: WorkStore::new(settings.records_path.clone()),
    });

    let app = axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/anais2024", axum::routing::get(handlers::works::list_all))
        .route(
            "/anais2024/apresentacoes",
            axum::routing::get(handlers::works::list_presentations),
        )
        .route(
            "/anais2024/exposicoes",
            axum::routing::get(handlers::works::list_expositions),
        )
        .route(
            "/anais2024/estatisticas",
            axum::routing::get(handlers::stats::stats),
        )
        .route(
            "/anais2024/pagina/{page_number}",
            axum::routing::get(handlers::lookup::by_page),
        )
        .route(
            "/anais2024/titulo/{titulo}",
            axum::routing::get(handlers::lookup::by_title),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
