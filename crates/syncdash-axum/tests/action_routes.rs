//! Integration tests for the POST actions, with the job launcher mocked.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use common::{MockLauncher, TestDashboard, TestResponse, post, send};
use syncdash_core::{LaunchError, LaunchedJob, SyncStatus, classify};

fn assert_security_headers(res: &TestResponse) {
    assert_eq!(res.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(res.header("x-frame-options"), Some("DENY"));
    assert_eq!(
        res.header("cache-control"),
        Some("no-cache, no-store, must-revalidate")
    );
}

#[tokio::test]
async fn clear_resets_both_logs() {
    let dash = TestDashboard::new();
    dash.write_sync_log("ERROR: old failure\nSome syncs failed. Check logs for details.\n");
    dash.write_server_log("old server line\n");

    let res = post(dash.router(), "/clear").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), serde_json::json!({"status": "success"}));
    assert_security_headers(&res);

    let sync = dash.sync_log();
    assert_eq!(sync.lines().count(), 1);
    assert!(sync.ends_with("[INFO] Logs cleared via web interface\n"));
    assert!(!sync.contains("old failure"));

    let server = dash.server_log();
    assert!(server.ends_with("[INFO] Server logs cleared via web interface\n"));
    assert!(!server.contains("old server line"));

    assert_eq!(classify(&dash.config.sync_log), SyncStatus::NoRunYet);
}

#[tokio::test]
async fn clear_leaves_missing_logs_missing() {
    let dash = TestDashboard::new();

    let res = post(dash.router(), "/clear").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(!dash.config.sync_log.exists());
    assert!(!dash.config.server_log.exists());
}

#[tokio::test]
async fn oversized_body_is_rejected_without_mutation() {
    let dash = TestDashboard::new();
    dash.write_sync_log("keep me\n");

    let res = send(
        dash.router(),
        Request::builder()
            .method("POST")
            .uri("/clear")
            .header(header::CONTENT_LENGTH, "2048")
            .body(Body::from(vec![b' '; 2048]))
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_security_headers(&res);
    assert_eq!(dash.sync_log(), "keep me\n");
}

#[tokio::test]
async fn oversized_body_without_length_header_is_rejected() {
    let dash = TestDashboard::new();
    dash.write_sync_log("keep me\n");

    let res = send(
        dash.router(),
        Request::builder()
            .method("POST")
            .uri("/clear")
            .body(Body::from(vec![b'x'; 4096]))
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(dash.sync_log(), "keep me\n");
}

#[tokio::test]
async fn malformed_json_is_rejected_without_mutation() {
    let dash = TestDashboard::new();
    dash.write_sync_log("keep me\n");

    let res = send(
        dash.router(),
        Request::builder()
            .method("POST")
            .uri("/clear")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{broken"))
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"], "Invalid request data");
    assert_eq!(dash.sync_log(), "keep me\n");
}

#[tokio::test]
async fn run_reports_started_pid() {
    let dash = TestDashboard::new();
    let expected_log = dash.config.sync_log.clone();
    let expected_job = dash.config.job_command();

    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .withf(move |job, output| *job == expected_job && output == expected_log.as_path())
        .times(1)
        .returning(|_, _| Ok(LaunchedJob { pid: 4242 }));

    let res = post(dash.router_with(launcher), "/run").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        serde_json::json!({"status": "started", "pid": 4242})
    );
    assert_security_headers(&res);
}

#[tokio::test]
async fn run_spawn_failure_is_generic() {
    let dash = TestDashboard::new();

    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .times(1)
        .returning(|_, _| Err(LaunchError::Spawn("/bin/secret: permission denied".into())));

    let res = post(dash.router_with(launcher), "/run").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json(),
        serde_json::json!({"status": "error", "message": "Failed to start sync process"})
    );
    assert!(!res.text().contains("secret"));
    assert_security_headers(&res);
}

#[tokio::test]
async fn run_internal_failure_is_generic() {
    let dash = TestDashboard::new();

    let mut launcher = MockLauncher::new();
    launcher
        .expect_launch()
        .times(1)
        .returning(|_, _| Err(LaunchError::Internal("poisoned".into())));

    let res = post(dash.router_with(launcher), "/run").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json(),
        serde_json::json!({"status": "error", "message": "Internal server error"})
    );
}

#[tokio::test]
async fn run_rejects_oversized_body_before_launching() {
    let dash = TestDashboard::new();

    let res = send(
        dash.router(),
        Request::builder()
            .method("POST")
            .uri("/run")
            .header(header::CONTENT_LENGTH, "1025")
            .body(Body::from(vec![b' '; 1025]))
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_real_launcher_appends_to_sync_log() {
    use std::sync::Arc;
    use std::time::Duration;
    use syncdash_axum::{AxumContext, create_router};
    use syncdash_runtime::DetachedLauncher;

    let mut dash = TestDashboard::new();
    dash.config.job_args = vec!["-c".into(), "echo Starting sync process.".into()];
    dash.write_sync_log("previous run\n");

    let app = create_router(AxumContext::new(
        dash.config.clone(),
        Arc::new(DetachedLauncher::new()),
    ));
    let res = post(app, "/run").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.json()["pid"].as_u64().unwrap() > 0);

    let mut content = String::new();
    for _ in 0..50 {
        content = dash.sync_log();
        if content.contains("Starting sync process.") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(content.starts_with("previous run\n"));
    assert!(content.contains("Starting sync process."));
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_missing_script_leaves_sync_log_untouched() {
    use std::sync::Arc;
    use syncdash_axum::{AxumContext, create_router};
    use syncdash_runtime::DetachedLauncher;

    let mut dash = TestDashboard::new();
    dash.config.job_program = dash.temp.path().join("no-such-interpreter");
    dash.write_sync_log("previous run\n");

    let app = create_router(AxumContext::new(
        dash.config.clone(),
        Arc::new(DetachedLauncher::new()),
    ));
    let res = post(app, "/run").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json()["message"], "Failed to start sync process");
    assert_eq!(dash.sync_log(), "previous run\n");
}
