#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use netpanel_api::{create_api_routes, AppState};
use netpanel_application::ports::{ConfigChecker, ServiceBackends, ServiceController};
use netpanel_application::use_cases::{
    ApplyDnsConfigUseCase, GetDnsConfigUseCase, GetServiceStatusUseCase,
};
use netpanel_domain::{BindSettings, DomainError, ExecutionMode};
use netpanel_infrastructure::{FsArtifactStore, SimulatedChecker, SimulatedServiceController};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Checker that rejects every artifact.
pub struct RejectingChecker;

#[async_trait]
impl ConfigChecker for RejectingChecker {
    async fn check_config(&self, path: &Path) -> Result<(), DomainError> {
        Err(DomainError::CommandFailed {
            command: format!("named-checkconf {}", path.display()),
            status: 1,
            output: "unknown option 'bogus'".to_string(),
        })
    }

    async fn check_zone(&self, zone_name: &str, path: &Path) -> Result<(), DomainError> {
        Err(DomainError::CommandFailed {
            command: format!("named-checkzone {} {}", zone_name, path.display()),
            status: 1,
            output: format!("zone {}: has 0 SOA records", zone_name),
        })
    }
}

/// Controller whose reload always fails.
pub struct BrokenReload;

#[async_trait]
impl ServiceController for BrokenReload {
    async fn reload(&self) -> Result<(), DomainError> {
        Err(DomainError::CommandFailed {
            command: "rndc reload".to_string(),
            status: 1,
            output: "rndc: connect failed: 127.0.0.1#953: connection refused".to_string(),
        })
    }

    async fn is_running(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}

pub fn simulated_backends() -> ServiceBackends {
    ServiceBackends::new(
        Arc::new(SimulatedChecker::new("named-checkconf", "named-checkzone")),
        Arc::new(SimulatedServiceController::new(vec![
            "rndc".to_string(),
            "reload".to_string(),
        ])),
    )
}

/// Router wired against a temporary sandbox in simulation mode.
pub struct TestApp {
    pub sandbox: TempDir,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_backends(simulated_backends())
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        let sandbox = TempDir::new().unwrap();
        let settings = BindSettings {
            mode: ExecutionMode::Simulation,
            sandbox_dir: sandbox.path().to_path_buf(),
            ..BindSettings::default()
        };
        let store = Arc::new(FsArtifactStore::new());

        let state = AppState {
            apply_config: Arc::new(ApplyDnsConfigUseCase::new(
                store.clone(),
                backends.clone(),
                backends.clone(),
                settings.clone(),
            )),
            get_config: Arc::new(GetDnsConfigUseCase::new(
                store,
                backends.clone(),
                backends.clone(),
                settings,
            )),
            get_status: Arc::new(GetServiceStatusUseCase::new(
                backends,
                ExecutionMode::Simulation,
            )),
        };

        Self {
            sandbox,
            router: Router::new().nest("/api", create_api_routes(state)),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
