//! Beam Solver HTTP Server

use anyhow::Context;
use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use beam_solver::prelude::*;

const DEFAULT_ADDR: &str = "0.0.0.0:8086";

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    beam: BeamData,
    #[serde(default)]
    loads: LoadAssembly,
    /// Evaluate only these stations instead of sampling a full diagram
    #[serde(default)]
    stations: Option<Vec<f64>>,
    #[serde(default)]
    options: AnalysisOptions,
}

#[derive(Debug, Deserialize)]
struct BeamData {
    length: f64,
    e: f64,
    i: f64,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<ResultsData>,
}

#[derive(Debug, Serialize)]
struct ResultsData {
    boundary: BoundaryConstants,
    stations: Vec<ResponseValues>,
    summary: DiagramSummary,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn analyze(Json(request): Json<AnalysisRequest>) -> impl IntoResponse {
    if request.loads.is_empty() {
        log::info!("analyze: L = {}, unloaded", request.beam.length);
    } else {
        log::info!(
            "analyze: L = {}, {} load items",
            request.beam.length,
            request.loads.item_count()
        );
    }

    match run_analysis(request) {
        Ok(results) => (
            StatusCode::OK,
            Json(AnalysisResponse {
                success: true,
                error: None,
                results: Some(results),
            }),
        ),
        Err(e) => {
            log::warn!("analysis rejected: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(AnalysisResponse {
                    success: false,
                    error: Some(e.to_string()),
                    results: None,
                }),
            )
        }
    }
}

fn run_analysis(request: AnalysisRequest) -> BeamResult<ResultsData> {
    let BeamData { length, e, i } = request.beam;
    let model = AnalysisModel::new(length, e, i, request.loads)?;
    let engine = model.engine();

    match request.stations {
        Some(xs) => {
            let boundary = engine.boundary_constants()?;
            let stations = xs
                .into_iter()
                .map(|x| engine.response_with(&boundary, x))
                .collect::<BeamResult<Vec<_>>>()?;
            let summary = DiagramSummary::from_stations(&stations);
            Ok(ResultsData {
                boundary,
                stations,
                summary,
            })
        }
        None => {
            let diagram = engine.diagram(&request.options)?;
            Ok(ResultsData {
                boundary: diagram.boundary,
                stations: diagram.stations,
                summary: diagram.summary,
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let addr: SocketAddr = std::env::var("BEAM_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("BEAM_SERVER_ADDR is not a valid socket address")?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .layer(cors);

    println!("Beam Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Analysis:     POST /api/v1/analyze");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
