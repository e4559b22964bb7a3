mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use helpers::{simulated_backends, BrokenReload, RejectingChecker, TestApp};
use http_body_util::BodyExt;
use netpanel_application::ports::ServiceBackends;
use netpanel_domain::DnsConfiguration;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn scenario_payload(server_enabled: bool) -> serde_json::Value {
    json!({
        "dnsServerStatus": server_enabled,
        "forwarders": ["8.8.8.8"],
        "zones": [{
            "id": "zone-1",
            "zoneName": "example.com",
            "zoneType": "master",
            "fileName": "db.example.com",
            "soaSettings": {
                "ttl": "3600",
                "primaryNameserver": "ns1.example.com.",
                "adminEmail": "admin@example.com",
                "serial": "2024030701",
                "refresh": "3600",
                "retry": "1800",
                "expire": "604800",
                "minimumTtl": "86400"
            },
            "records": [
                { "id": "r1", "type": "A", "name": "@", "value": "192.168.1.100" },
                { "id": "r2", "type": "CNAME", "name": "www", "value": "@" },
                { "id": "r3", "type": "MX", "name": "@", "value": "mail.example.com", "priority": 10 }
            ]
        }]
    })
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

// ============================================================================
// GET /api/dns/config
// ============================================================================

#[tokio::test]
async fn test_get_returns_default_template_when_nothing_deployed() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/dns/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isDefault"], true);
    assert_eq!(body["dnsServerStatus"], false);
    assert_eq!(body["zones"][0]["zoneName"], "example.com");
    assert_eq!(body["forwarders"], json!(["8.8.8.8", "1.1.1.1"]));
}

#[tokio::test]
async fn test_get_after_apply_is_not_implemented() {
    let app = TestApp::new();
    let (status, _) = app
        .post_json("/api/dns/config", &scenario_payload(false))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/dns/config").await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "not_implemented");
}

// ============================================================================
// POST /api/dns/config
// ============================================================================

#[tokio::test]
async fn test_apply_writes_sandbox_artifacts() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/dns/config", &scenario_payload(false))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["mode"], "simulation");
    assert_eq!(body["reloaded"], false);
    assert_eq!(body["fellBack"], false);
    assert_eq!(body["warnings"], json!([]));
    assert_eq!(
        body["appliedConfiguration"]["zones"][0]["zoneName"],
        "example.com"
    );
    assert_eq!(body["artifacts"].as_array().unwrap().len(), 3);

    let zone =
        std::fs::read_to_string(app.sandbox.path().join("zones/db.example.com")).unwrap();
    assert!(zone.contains("@ IN A 192.168.1.100"));
    assert!(zone.contains("www IN CNAME @"));
    assert!(zone.contains("@ IN MX 10 mail.example.com."));
    assert!(zone.contains("2024030701"));
}

#[tokio::test]
async fn test_apply_enabled_server_reports_reload() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/dns/config", &scenario_payload(true))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reloaded"], true);
}

#[tokio::test]
async fn test_apply_returns_skipped_record_warnings() {
    let app = TestApp::new();
    let mut payload = scenario_payload(false);
    payload["zones"][0]["records"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "id": "r4", "type": "MX", "name": "backup", "value": "mx2.example.com." }));

    let (status, body) = app.post_json("/api/dns/config", &payload).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("missing priority"));
}

#[tokio::test]
async fn test_apply_empty_zone_list_is_bad_request() {
    let app = TestApp::new();
    let mut payload = scenario_payload(false);
    payload["zones"] = json!([]);

    let (status, body) = app.post_json("/api/dns/config", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["diskStateChanged"], false);
    assert!(body["details"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d == "At least one zone is required"));
    assert!(!app.sandbox.path().join("named.conf.options").exists());
}

#[tokio::test]
async fn test_apply_checker_rejection_is_unprocessable() {
    let backends = ServiceBackends::new(
        Arc::new(RejectingChecker),
        simulated_backends().controller,
    );
    let app = TestApp::with_backends(backends);

    let (status, body) = app
        .post_json("/api/dns/config", &scenario_payload(true))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_failure");
    assert_eq!(body["rolledBack"], false);
    assert!(body["output"].as_str().unwrap().contains("has 0 SOA records"));
    // Default policy keeps checked-but-rejected artifacts on disk.
    assert!(app.sandbox.path().join("zones/db.example.com").exists());
}

#[tokio::test]
async fn test_apply_reload_failure_is_bad_gateway() {
    let backends = ServiceBackends::new(
        simulated_backends().checker,
        Arc::new(BrokenReload),
    );
    let app = TestApp::with_backends(backends);

    let (status, body) = app
        .post_json("/api/dns/config", &scenario_payload(true))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "reload_failure");
    assert_eq!(body["diskStateChanged"], true);
    assert!(body["output"].as_str().unwrap().contains("connection refused"));
    assert!(app.sandbox.path().join("named.conf.local").exists());
}

#[tokio::test]
async fn test_apply_accepts_serialized_template() {
    let app = TestApp::new();
    let payload = serde_json::to_value(DnsConfiguration::default_template(false)).unwrap();

    let (status, body) = app.post_json("/api/dns/config", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

// ============================================================================
// GET /api/dns/status
// ============================================================================

#[tokio::test]
async fn test_status_in_simulation_reports_stopped() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/dns/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "running": false, "mode": "simulation" }));
}
