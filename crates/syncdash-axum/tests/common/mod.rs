//! Shared fixtures for the router integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use mockall::mock;
use syncdash_axum::{AxumContext, create_router};
use syncdash_core::{DashboardConfig, JobCommand, JobLauncher, LaunchError, LaunchedJob};
use tempfile::TempDir;
use tower::ServiceExt;

mock! {
    pub Launcher {}

    #[async_trait]
    impl JobLauncher for Launcher {
        async fn launch(&self, job: &JobCommand, output: &Path) -> Result<LaunchedJob, LaunchError>;
    }
}

/// A dashboard whose logs live in a temporary directory.
pub struct TestDashboard {
    pub temp: TempDir,
    pub config: DashboardConfig,
}

impl TestDashboard {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = DashboardConfig {
            sync_log: temp.path().join("sync.log"),
            server_log: temp.path().join("web_server.log"),
            job_program: PathBuf::from("/bin/sh"),
            job_args: vec!["-c".into(), "echo sync".into()],
            job_working_dir: temp.path().to_path_buf(),
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            fallback_port: 0,
            ..DashboardConfig::default()
        };
        Self { temp, config }
    }

    pub fn write_sync_log(&self, content: &str) {
        std::fs::write(&self.config.sync_log, content).unwrap();
    }

    pub fn write_server_log(&self, content: &str) {
        std::fs::write(&self.config.server_log, content).unwrap();
    }

    pub fn sync_log(&self) -> String {
        std::fs::read_to_string(&self.config.sync_log).unwrap()
    }

    pub fn server_log(&self) -> String {
        std::fs::read_to_string(&self.config.server_log).unwrap()
    }

    /// Router backed by `launcher`.
    pub fn router_with(&self, launcher: MockLauncher) -> Router {
        create_router(AxumContext::new(self.config.clone(), Arc::new(launcher)))
    }

    /// Router whose launcher must never be called.
    pub fn router(&self) -> Router {
        let mut launcher = MockLauncher::new();
        launcher.expect_launch().never();
        self.router_with(launcher)
    }
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.to_str().unwrap())
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post(app: Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
