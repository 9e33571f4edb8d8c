use axum::{extract::State, http::StatusCode, response::Json, routing::{get, post}, Router};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::{DanglingNeighbors, Dijkstra};
use crate::algorithm::traits::{DistanceTable, NearestTarget};
use crate::graph::validate_weights;
use crate::web::models::*;
use crate::Error;

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub engine: Dijkstra,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Dijkstra::new(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/distances", post(compute_distances))
        .route("/api/nearest", post(find_nearest))
        .route("/api/health", get(health_check))
}

/// Compute the full distance table from a start node
pub async fn compute_distances(
    State(state): State<AppState>,
    Json(request): Json<DistancesRequest>,
) -> Result<Json<DistancesResponse>, ApiError> {
    validate_weights::<String, f64, WebGraph>(&request.graph).map_err(error_response)?;

    let start_time = Instant::now();
    let table: DistanceTable<String, f64> = state
        .engine
        .compute_all_distances(&request.graph, &request.start)
        .map_err(error_response)?;
    let execution_time = start_time.elapsed();

    let distances = table
        .to_sorted_vec()
        .into_iter()
        .map(|(node, d)| (node, (!d.is_infinite()).then_some(d)))
        .collect();

    debug!("distances from {} computed in {:?}", request.start, execution_time);

    Ok(Json(DistancesResponse {
        execution_id: Uuid::new_v4(),
        start: request.start,
        distances,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Find the nearest reachable target and the path to it
pub async fn find_nearest(
    State(state): State<AppState>,
    Json(request): Json<NearestRequest>,
) -> Result<Json<NearestResponse>, ApiError> {
    validate_weights::<String, f64, WebGraph>(&request.graph).map_err(error_response)?;

    let engine = if request.strict {
        state.engine.clone().with_dangling_policy(DanglingNeighbors::Reject)
    } else {
        state.engine.clone()
    };

    let start_time = Instant::now();
    let found: NearestTarget<String, f64> = engine
        .find_path_to_nearest_target(&request.graph, &request.start, &request.targets)
        .map_err(error_response)?;
    let execution_time = start_time.elapsed();

    info!(
        "nearest target from {} is {} at {} ({} hops)",
        request.start,
        found.target,
        found.distance,
        found.path.len().saturating_sub(1)
    );

    Ok(Json(NearestResponse {
        execution_id: Uuid::new_v4(),
        start: request.start,
        target: found.target,
        distance: found.distance,
        path: found.path,
        metrics: SearchMetrics {
            heap_pops: found.stats.pops,
            stale_skipped: found.stats.stale_skipped,
            relaxations: found.stats.relaxations,
        },
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Maps a library error onto a status code and JSON body
fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::UnknownStartNode(_) => (StatusCode::BAD_REQUEST, "unknown_start_node"),
        Error::NoTargetReachable => (StatusCode::NOT_FOUND, "no_target_reachable"),
        Error::MalformedGraph { .. } => (StatusCode::BAD_REQUEST, "malformed_graph"),
        Error::NegativeWeight { .. } => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::Io(_) | Error::Json(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
