use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use catalog_admin::model::{Brand, BrandId, Car, CarId, CarModel, ModelId};

#[path = "catalog_dev_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "catalog_dev_server/tables.rs"]
mod tables;
use self::tables::*;
#[path = "catalog_dev_server/handlers_names.rs"]
mod handlers_names;
use self::handlers_names::*;
#[path = "catalog_dev_server/handlers_cars.rs"]
mod handlers_cars;
use self::handlers_cars::*;
#[path = "catalog_dev_server/routes.rs"]
mod routes;
use self::routes::*;

// Images and form fields together; the multipart extractor defaults to 2 MiB.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

struct AppState {
    tables: RwLock<Tables>,
}

#[derive(Parser)]
#[command(name = "catalog-dev-server")]
#[command(about = "In-memory vehicle catalog admin API (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    catalog_admin::logging::init("info");
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let state = Arc::new(AppState {
        tables: RwLock::new(Tables::default()),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/uploads/cars/:name", get(get_upload))
        .nest(catalog_admin::config::API_PREFIX, admin_router())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!(%local_addr, "catalog-dev-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn get_upload(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, Response> {
    let tables = state.tables.read().await;
    let upload = tables.uploads.get(&name).ok_or_else(not_found)?;
    Ok((
        [(header::CONTENT_TYPE, upload.content_type.clone())],
        axum::body::Bytes::from(upload.bytes.clone()),
    )
        .into_response())
}
