use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::records::{CoralRecord, HazardRecord, PoiRecord};
use crate::world::{GameState, WorldState};

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    /// Unix epoch milliseconds.
    pub timestamp: u64,
}

pub async fn health() -> Json<Health> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    Json(Health {
        status: "ok",
        timestamp,
    })
}

pub async fn gamestate(State(world): State<Arc<WorldState>>) -> Json<GameState> {
    Json(world.gamestate.clone())
}

pub async fn corals(State(world): State<Arc<WorldState>>) -> Json<Vec<CoralRecord>> {
    Json(world.corals.clone())
}

pub async fn hazards(State(world): State<Arc<WorldState>>) -> Json<Vec<HazardRecord>> {
    Json(world.hazards.clone())
}

pub async fn pois(State(world): State<Arc<WorldState>>) -> Json<Vec<PoiRecord>> {
    Json(world.pois.clone())
}
