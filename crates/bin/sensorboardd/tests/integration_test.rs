//! End-to-end smoke tests for the full sensorboardd stack.
//!
//! Each test wires the real router and record service over the in-memory
//! item store and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sensorboard_adapter_http_axum::router;
use sensorboard_adapter_http_axum::state::AppState;
use sensorboard_adapter_storage_memory::InMemoryRecordStore;
use sensorboard_app::ports::{RecordStore, ScanOutput};
use sensorboard_app::services::record_service::RecordService;
use sensorboard_domain::error::SensorboardError;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Store whose every scan fails, like an unreachable table.
struct UnreachableStore;

impl RecordStore for UnreachableStore {
    async fn scan(&self) -> Result<ScanOutput, SensorboardError> {
        Err(SensorboardError::Store(
            "dispatch failure: connection refused".into(),
        ))
    }
}

fn app<S: RecordStore + Send + Sync + 'static>(store: S) -> axum::Router {
    router::build(AppState::new(RecordService::new(store)))
}

fn seeded(json: &str) -> axum::Router {
    app(InMemoryRecordStore::from_json_str(json).expect("seed should parse"))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check & dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, _) = get(seeded("[]"), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn should_render_home_page() {
    let (status, body) = get(seeded("[]"), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Sensorboard</title>"));
}

#[tokio::test]
async fn should_render_home_page_when_store_is_unreachable() {
    let (status, _) = get(app(UnreachableStore), "/").await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// /data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_scenario_records_newest_first() {
    let (status, body) = get(
        seeded(r#"[{"id":"a","timestamp":100}, {"id":"b"}, {"id":"c","timestamp":200}]"#),
        "/data",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([
            {"id": "c", "timestamp": 200},
            {"id": "a", "timestamp": 100},
            {"id": "b"}
        ])
    );
}

#[tokio::test]
async fn should_order_sensor_readings_by_timestamp() {
    let (_, body) = get(
        seeded(
            r#"[
                {"device_id": "DCDA0C5A94CC", "temperature": 21.5, "timestamp": 1700000100},
                {"device_id": "DCDA0C5A94CC", "temperature": 21.9, "timestamp": 1700000300},
                {"device_id": "DCDA0C5A94CC", "temperature": 22.4},
                {"device_id": "DCDA0C5A94CC", "temperature": 21.7, "timestamp": 1700000200}
            ]"#,
        ),
        "/data",
    )
    .await;

    let records: Vec<Value> = serde_json::from_str(&body).unwrap();
    let temperatures: Vec<f64> = records
        .iter()
        .map(|rec| rec["temperature"].as_f64().unwrap())
        .collect();
    assert_eq!(temperatures, vec![21.9, 21.7, 21.5, 22.4]);
}

#[tokio::test]
async fn should_return_empty_array_when_store_is_empty() {
    let (status, body) = get(seeded("[]"), "/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn should_return_empty_array_when_store_is_unreachable() {
    let (status, body) = get(app(UnreachableStore), "/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn should_return_identical_bodies_for_repeated_reads() {
    let router = seeded(
        r#"[{"id":"x","timestamp":5}, {"id":"y","timestamp":5}, {"id":"z"}, {"id":"w","timestamp":9}]"#,
    );

    let (_, first) = get(router.clone(), "/data").await;
    let (_, second) = get(router, "/data").await;

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// /test_dynamodb
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_records_from_check() {
    let (status, body) = get(
        seeded(r#"[{"id":"a","timestamp":100}, {"id":"c","timestamp":200}]"#),
        "/test_dynamodb",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{"id": "c", "timestamp": 200}, {"id": "a", "timestamp": 100}])
    );
}

#[tokio::test]
async fn should_return_empty_array_from_check_when_store_is_empty() {
    let (status, body) = get(seeded("[]"), "/test_dynamodb").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn should_return_error_object_from_check_when_store_is_unreachable() {
    let (status, body) = get(app(UnreachableStore), "/test_dynamodb").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"error": "item store error: dispatch failure: connection refused"})
    );
}
