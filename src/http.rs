use crate::rpc::{handle_request, RpcRequest, RpcResponse};
use crate::DashboardServer;
use anyhow::Result;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    server: Arc<DashboardServer>,
}

async fn handle_rpc(State(state): State<AppState>, Json(req): Json<RpcRequest>) -> Json<RpcResponse> {
    let res = handle_request(&state.server, req).await;
    Json(res)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(server: DashboardServer) -> Router {
    let state = AppState {
        server: Arc::new(server),
    };

    Router::new()
        .route("/rpc", post(handle_rpc))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_http_server(server: DashboardServer, port: u16) -> Result<()> {
    let app = router(server);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP RPC server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
