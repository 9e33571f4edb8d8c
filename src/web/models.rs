use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::graph::AdjacencyGraph;

/// Graph as accepted over the wire: node -> (neighbor -> weight)
pub type WebGraph = AdjacencyGraph<String, f64>;

/// Parameters for a full distance table computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancesRequest {
    pub graph: WebGraph,
    pub start: String,
}

/// Parameters for a nearest-target search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestRequest {
    pub graph: WebGraph,
    pub start: String,
    pub targets: Vec<String>,
    /// Reject edges that point at nodes missing from the graph
    #[serde(default)]
    pub strict: bool,
}

/// Distance table; unreachable nodes are `null`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancesResponse {
    pub execution_id: Uuid,
    pub start: String,
    pub distances: BTreeMap<String, Option<f64>>,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Search statistics reported with a nearest-target result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetrics {
    pub heap_pops: usize,
    pub stale_skipped: usize,
    pub relaxations: usize,
}

/// Nearest reachable target with the path to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestResponse {
    pub execution_id: Uuid,
    pub start: String,
    pub target: String,
    pub distance: f64,
    pub path: Vec<String>,
    pub metrics: SearchMetrics,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
