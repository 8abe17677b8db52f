//! End-to-end client behavior against a mock backend: session teardown on
//! rejected credentials, verbatim login errors, refresh-after-mutation,
//! binary exports and the two-step delete.

#![allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code

use std::sync::Arc;

use mockito::Matcher;

use bigeye_client::{
    AdminClient, ApiError, ClientConfig, MemorySessionStore, Session, SessionState, SessionStore,
    SlipsPage, StoredSession, UsersPage,
};
use bigeye_shared::SlipStatus;

fn client_with_store(base: &str) -> (AdminClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let config = ClientConfig::with_api_url(base, std::path::PathBuf::from("/dev/null"));
    let client = AdminClient::with_store(&config, store.clone()).unwrap();
    (client, store)
}

// ===== Session teardown =====

#[tokio::test]
async fn test_unauthorized_clears_token_and_persisted_session() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/admin/dashboard/stats")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Token expired"}"#)
        .create_async()
        .await;

    let (client, store) = client_with_store(&server.url());
    client.token_store().set(Some("stale-token".to_string()));
    store
        .save(&StoredSession {
            token: "stale-token".to_string(),
            user_id: "admin-1".to_string(),
        })
        .unwrap();

    let err = client.dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(client.token_store().get(), None);
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_forbidden_treated_like_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/admin/cleanup-jobs")
        .with_status(403)
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok".to_string()));

    let err = client.cleanup_jobs().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(client.token_store().get(), None);
}

// ===== Login =====

#[tokio::test]
async fn test_login_failure_is_verbatim_and_persists_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/admin/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Invalid credentials"}"#)
        .create_async()
        .await;

    let (client, store) = client_with_store(&server.url());
    let mut session = Session::new(client.clone());
    assert_eq!(session.resolve().unwrap(), SessionState::Anonymous);

    let err = session
        .login("admin@example.com", "wrong")
        .await
        .unwrap_err();
    // The login path is exempt from the forced-logout rule; the backend's
    // message surfaces untouched.
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(client.token_store().get(), None);
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_login_success_persists_and_authenticates() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/admin/login")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "email": "admin@example.com"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"fresh-token","user_id":"admin-1"}"#)
        .create_async()
        .await;

    let (client, store) = client_with_store(&server.url());
    let mut session = Session::new(client.clone());
    session.resolve().unwrap();
    session.login("admin@example.com", "hunter2").await.unwrap();

    assert_eq!(session.state(), SessionState::Authenticated);
    assert_eq!(session.user_id(), Some("admin-1"));
    assert_eq!(client.token_store().get().as_deref(), Some("fresh-token"));
    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.token, "fresh-token");
    assert_eq!(saved.user_id, "admin-1");
}

#[tokio::test]
async fn test_resolve_restores_persisted_session() {
    let (client, store) = client_with_store("http://localhost:9");
    store
        .save(&StoredSession {
            token: "saved-token".to_string(),
            user_id: "admin-2".to_string(),
        })
        .unwrap();

    let mut session = Session::new(client.clone());
    assert_eq!(session.resolve().unwrap(), SessionState::Authenticated);
    assert_eq!(session.user_id(), Some("admin-2"));
    assert_eq!(client.token_store().get().as_deref(), Some("saved-token"));
}

// ===== Refresh after mutation =====

#[tokio::test]
async fn test_approve_refetches_the_slip_list() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/admin/slips")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("status".into(), "PENDING".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"slips":[],"total":0,"page":1,"pages":0}"#)
        .expect(2)
        .create_async()
        .await;
    let approve = server
        .mock("POST", "/admin/slips/s-1/approve")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Slip approved"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok".to_string()));

    let mut page = SlipsPage::new(client, 50);
    page.set_filter(Some(SlipStatus::Pending));
    page.refresh().await.unwrap();
    let res = page.approve("s-1", 100.0).await.unwrap();
    assert_eq!(res.message, "Slip approved");

    approve.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_suspend_refetches_the_user_list() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/admin/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"users":[],"total":0,"page":1,"pages":0}"#)
        .expect(1)
        .create_async()
        .await;
    let suspend = server
        .mock("POST", "/admin/users/u-1/suspend")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"User suspended"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok".to_string()));

    // The mutation itself triggers the re-fetch; no prior refresh needed.
    let mut page = UsersPage::new(client, 50);
    let res = page.suspend("u-1").await.unwrap();
    assert_eq!(res.message, "User suspended");

    suspend.assert_async().await;
    list.assert_async().await;
}

// ===== Binary export =====

#[tokio::test]
async fn test_finance_export_returns_raw_bytes() {
    // xlsx files are zip archives; the payload must come back untouched
    // even though it is not valid JSON.
    let payload: &[u8] = b"PK\x03\x04fake-xlsx-payload";
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/admin/finance/export")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2026-01-01".into()),
            Matcher::UrlEncoded("to".into(), "2026-01-31".into()),
            Matcher::UrlEncoded("format".into(), "xlsx".into()),
        ]))
        .with_status(200)
        .with_header(
            "content-type",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .with_body(payload)
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok".to_string()));

    let bytes = client
        .finance_export("2026-01-01", "2026-01-31")
        .await
        .unwrap();
    assert_eq!(&bytes[..], payload);
}

// ===== Two-step delete =====

#[tokio::test]
async fn test_delete_fires_only_after_confirm() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/admin/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"users":[{"uid":"u-1","email":"gone@example.com","credits":0.0,"status":"active"}],"total":1,"page":1,"pages":1}"#,
        )
        .expect(2)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/admin/users/u-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"User deleted"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok".to_string()));

    let mut page = UsersPage::new(client, 50);
    page.refresh().await.unwrap();

    let user = page.users()[0].clone();
    let pending = page.request_delete(&user);
    // Nothing destructive has happened yet.
    assert!(!delete.matched_async().await);

    let res = page.confirm_delete(pending).await.unwrap();
    assert_eq!(res.message, "User deleted");
    delete.assert_async().await;
    list.assert_async().await;
}

// ===== Bearer attachment =====

#[tokio::test]
async fn test_bearer_header_attached_when_token_held() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/admin/dashboard/stats")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"active_users":1,"new_users_today":0,"topup_thb_today":0.0,"recognized_thb_today":0.0,"exchange_rate":0.26,"jobs_today":0,"errors_today":0,"success_rate":100.0,"pending_slips":0,"stuck_jobs":0}"#,
        )
        .create_async()
        .await;

    let (client, _store) = client_with_store(&server.url());
    client.token_store().set(Some("tok-123".to_string()));
    client.dashboard_stats().await.unwrap();
}
