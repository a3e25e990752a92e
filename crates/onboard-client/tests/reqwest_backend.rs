//! Integration tests for the reqwest backend against a stub API server.
//!
//! Verifies that the client:
//! - exchanges an API key for a token once and sends it as a bearer token
//! - shares one token exchange between concurrent first calls
//! - retries reads on server errors but never retries writes
//! - maps error statuses to the right `OnboardError` variants
//! - keeps the base URL's path prefix and identifies itself in the user agent

mod common;

use chrono::{TimeZone, Utc};
use common::{StubApi, serve};
use onboard_client::{Credentials, DefaultOnboardClient, OnboardClientConfig};
use onboard_core::{OnboardApi, OnboardError, PointDataUpdate};
use std::time::Duration;

fn client_for(base_url: &str, credentials: Credentials) -> DefaultOnboardClient {
    let config = OnboardClientConfig::new(base_url)
        .with_credentials(credentials)
        .with_retry_delay(Duration::from_millis(1))
        .with_timeout(Duration::from_secs(5));
    DefaultOnboardClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn test_api_key_exchanged_once_and_sent_as_bearer() {
    let stub = StubApi::new()
        .route("POST /login/api-key", &[(200, r#"{"access_token": "tok-1"}"#)])
        .route("GET /buildings", &[(200, r#"[{"id": 1, "name": "HQ", "org_id": 4}]"#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::api_key("ob-p-secret"));

    let first = client.get_all_buildings().await.unwrap();
    let second = client.get_all_buildings().await.unwrap();

    assert_eq!(first[0].name.as_deref(), Some("HQ"));
    assert_eq!(second.len(), 1);

    let logins = stub.requests_to("/login/api-key");
    assert_eq!(logins.len(), 1, "token should be exchanged once");
    assert!(logins[0].body.contains("ob-p-secret"));

    for request in stub.requests_to("/buildings") {
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok-1"));
    }
}

#[tokio::test]
async fn test_user_password_login() {
    let stub = StubApi::new()
        .route("POST /login", &[(200, r#"{"access_token": "tok-2"}"#)])
        .route("GET /whoami", &[(200, r#"{"id": 9, "email": "ops@example.com"}"#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::user_password("ops@example.com", "pw"));

    let me = client.whoami().await.unwrap();

    assert_eq!(me["id"], 9);
    let login = &stub.requests_to("/login")[0];
    assert!(login.body.contains(r#""login":"ops@example.com""#));
    assert_eq!(
        stub.requests_to("/whoami")[0].authorization.as_deref(),
        Some("Bearer tok-2")
    );
}

#[tokio::test]
async fn test_rejected_login_is_unauthorized() {
    let stub = StubApi::new().route("POST /login/api-key", &[(401, r#""bad key""#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::api_key("wrong"));

    let err = client.get_tags().await.unwrap_err();

    assert!(matches!(err, OnboardError::Unauthorized { .. }));
    assert!(stub.requests_to("/tags").is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_calls_share_one_login() {
    let stub = StubApi::new()
        .route("POST /login/api-key", &[(200, r#"{"access_token": "tok-3"}"#)])
        .route("GET /tags", &[(200, "[]")]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::api_key("ob-p-shared"));

    let (a, b, c, d) = tokio::join!(
        client.get_tags(),
        client.get_tags(),
        client.get_tags(),
        client.get_tags()
    );

    for result in [a, b, c, d] {
        assert!(result.unwrap().is_empty());
    }
    assert_eq!(stub.requests_to("/login/api-key").len(), 1);
    let tags = stub.requests_to("/tags");
    assert_eq!(tags.len(), 4);
    for request in tags {
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok-3"));
    }
}

#[tokio::test]
async fn test_failed_login_is_retried_on_next_call() {
    let stub = StubApi::new()
        .route(
            "POST /login/api-key",
            &[(500, r#""auth down""#), (200, r#"{"access_token": "tok-4"}"#)],
        )
        .route("GET /tags", &[(200, "[]")]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::api_key("ob-p-retry"));

    let err = client.get_tags().await.unwrap_err();
    assert!(matches!(err, OnboardError::Temporary { status: 500, .. }));
    assert!(stub.requests_to("/tags").is_empty());

    client.get_tags().await.unwrap();

    assert_eq!(stub.requests_to("/login/api-key").len(), 2);
    assert_eq!(
        stub.requests_to("/tags")[0].authorization.as_deref(),
        Some("Bearer tok-4")
    );
}

#[tokio::test]
async fn test_get_retried_after_server_error() {
    let stub = StubApi::new().route(
        "GET /alerts",
        &[(503, r#""busy""#), (502, r#""busy""#), (200, r#"[{"id": 1}]"#)],
    );
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::token("t"));

    let alerts = client.get_alerts().await.unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(stub.requests_to("/alerts").len(), 3);
}

#[tokio::test]
async fn test_get_gives_up_after_max_retries() {
    let stub = StubApi::new().route("GET /alerts", &[(500, r#""down""#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::token("t"));

    let err = client.get_alerts().await.unwrap_err();

    assert!(err.is_temporary());
    assert_eq!(err.status(), Some(500));
    // First attempt plus the default three retries
    assert_eq!(stub.requests_to("/alerts").len(), 4);
}

#[tokio::test]
async fn test_many_retries_do_not_overflow_backoff() {
    let stub = StubApi::new().route("GET /alerts", &[(500, r#""down""#)]);
    let base = serve(stub.clone()).await;
    let config = OnboardClientConfig::new(&base)
        .with_credentials(Credentials::token("t"))
        .with_max_retries(70)
        .with_retry_delay(Duration::ZERO);
    let client = DefaultOnboardClient::new(&config).unwrap();

    let err = client.get_alerts().await.unwrap_err();

    assert!(matches!(err, OnboardError::Temporary { status: 500, .. }));
    assert_eq!(stub.requests_to("/alerts").len(), 71);
}

#[tokio::test]
async fn test_post_not_retried() {
    let stub = StubApi::new().route("POST /points_update", &[(503, r#""busy""#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::token("t"));
    let ts = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();

    let err = client
        .update_point_data(&[PointDataUpdate::new(7, 21.5, ts)])
        .await
        .unwrap_err();

    assert!(err.is_temporary());
    let requests = stub.requests_to("/points_update");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert!(requests[0].body.contains("2020-05-01T12:00:00Z"));
}

#[tokio::test]
async fn test_client_errors_not_retried() {
    let stub = StubApi::new()
        .route("GET /buildings/3/equipment", &[(404, r#""no such building""#)])
        .route("GET /users", &[(403, r#""admins only""#)]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::token("t"));

    match client.get_building_equipment(3).await.unwrap_err() {
        OnboardError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("no such building"));
        }
        other => panic!("Expected Api, got {other:?}"),
    }
    assert!(matches!(
        client.get_users().await.unwrap_err(),
        OnboardError::Unauthorized { .. }
    ));
    assert_eq!(stub.requests_to("/equipment").len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let stub = StubApi::new().route("GET /unit", &[(200, "<html>")]);
    let base = serve(stub.clone()).await;
    let client = client_for(&base, Credentials::token("t"));

    assert!(matches!(
        client.get_all_units().await.unwrap_err(),
        OnboardError::InvalidResponse { .. }
    ));
}

#[tokio::test]
async fn test_base_path_prefix_and_query_kept() {
    let stub = StubApi::new().route(
        "GET /api/v2/points",
        &[(200, r#"[{"id": 1}, {"id": 2}]"#)],
    );
    let base = serve(stub.clone()).await;
    let client = client_for(&format!("{base}/api/v2/"), Credentials::None);

    let points = client.get_points_by_ids(&[1, 2]).await.unwrap();

    assert_eq!(points.len(), 2);
    let request = &stub.requests()[0];
    assert_eq!(request.path, "/api/v2/points");
    assert!(request.query.as_deref().unwrap().starts_with("point_ids="));
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn test_user_agent_names_client() {
    let stub = StubApi::new().route("GET /tags", &[(200, "[]")]);
    let base = serve(stub.clone()).await;
    let config = OnboardClientConfig::new(&base).with_client_name("nightly-export");
    let client = DefaultOnboardClient::new(&config).unwrap();

    client.get_tags().await.unwrap();

    let agent = stub.requests()[0].user_agent.clone().unwrap();
    assert!(agent.starts_with("onboard-client/"));
    assert!(agent.ends_with("nightly-export"));
}
