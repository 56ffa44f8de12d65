use std::fs;
use std::path::Path;
use std::sync::Arc;

use abyss_server::{WorldState, build_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const INDEX_MARKER: &str = "<title>Project Abyss</title>";

fn write_fixtures(data: &Path, site: &Path) {
    fs::write(
        data.join("hazards.csv"),
        "row,col,type,severity,notes\n26,11,thermal_vent,5,Active Chimney\n42,44,acidic_zone,,Low pH Mass\n",
    )
    .unwrap();
    fs::write(
        data.join("poi.csv"),
        "row,col,id,category,label,description,research_value\n5,7,WRECK_005,wreck,Sunken Freighter,Deep resting state.,12\n",
    )
    .unwrap();
    fs::write(
        data.join("corals.csv"),
        "row,col,coral_cover_pct,health_index,bleaching_risk,biodiversity_index\n3,4,72,0.93,0.07,0.61\n",
    )
    .unwrap();
    fs::write(site.join("index.html"), format!("<html><head>{}</head></html>", INDEX_MARKER)).unwrap();
}

fn app(data: &Path, site: &Path) -> Router {
    let world = Arc::new(WorldState::load(data, 7));
    build_router(world, site)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

async fn get_json(app: Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{}", uri);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    let json = get_json(app(data.path(), site.path()), "/api/health").await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn gamestate_has_full_grid_and_metadata() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    write_fixtures(data.path(), site.path());
    let json = get_json(app(data.path(), site.path()), "/api/gamestate").await;

    assert_eq!(json["metadata"]["rows"], 50);
    assert_eq!(json["metadata"]["cols"], 50);
    let grid = json["grid"].as_array().unwrap();
    assert_eq!(grid.len(), 50);
    assert!(grid.iter().all(|row| row.as_array().unwrap().len() == 50));

    let wreck = &grid[5][7];
    assert_eq!(wreck["poi"]["label"], "Sunken Freighter");
    assert_eq!(wreck["poi"]["desc"], "Deep resting state.");
    let vent = &grid[26][11];
    assert_eq!(vent["hazard"]["type"], "thermal_vent");
    assert_eq!(vent["hazard"]["severity"], 5);
    assert_eq!(grid[3][4]["biome"], "coral");
}

#[tokio::test]
async fn flat_feeds_return_csv_records() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    write_fixtures(data.path(), site.path());
    let router = app(data.path(), site.path());

    let corals = get_json(router.clone(), "/api/corals").await;
    assert_eq!(corals[0]["coral_cover_pct"], 72.0);
    assert_eq!(corals[0]["health_index"], 0.93);

    let hazards = get_json(router.clone(), "/api/hazards").await;
    assert_eq!(hazards.as_array().unwrap().len(), 2);
    assert_eq!(hazards[1]["type"], "acidic_zone");
    assert!(hazards[1]["severity"].is_null());

    let pois = get_json(router, "/api/poi").await;
    assert_eq!(pois[0]["id"], "WRECK_005");
    assert_eq!(pois[0]["research_value"], 12);
}

#[tokio::test]
async fn missing_sources_serve_empty_sets() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    let router = app(&data.path().join("does-not-exist"), site.path());
    for uri in ["/api/corals", "/api/hazards", "/api/poi"] {
        let json = get_json(router.clone(), uri).await;
        assert_eq!(json, Value::Array(Vec::new()), "{}", uri);
    }
    let state = get_json(router, "/api/gamestate").await;
    assert_eq!(state["grid"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_client_index() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    write_fixtures(data.path(), site.path());
    let router = app(data.path(), site.path());

    for uri in ["/", "/chapter/3"] {
        let (status, body) = get(router.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(String::from_utf8(body).unwrap().contains(INDEX_MARKER));
    }
}

#[tokio::test]
async fn cors_is_permissive() {
    let data = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    let resp = app(data.path(), site.path())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let allow = resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap();
    assert_eq!(allow, "*");
}
