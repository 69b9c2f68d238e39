use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::{Value, json};

use portero_api::app::{self, AppServices};
use portero_auth::Claims;

const JWT_SECRET: &str = "black-box-test-secret-key-0123456789abcdef";

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let services = Arc::new(AppServices::build(JWT_SECRET.as_bytes(), 3600).unwrap());
        services.seed_admin("root", "Adm1n!Pass").unwrap();

        let app = app::build_app(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            services,
            handle,
        }
    }

    async fn signup(&self, client: &reqwest::Client, username: &str, password: &str) -> reqwest::Response {
        client
            .post(format!("{}/auth/signup", self.base_url))
            .json(&json!({
                "username": username,
                "password": password,
                "fullName": format!("{username} Tester"),
            }))
            .send()
            .await
            .unwrap()
    }

    async fn login(&self, client: &reqwest::Client, username: &str, password: &str) -> String {
        let res = client
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["expiresIn"], 3600);
        body["accessToken"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_token(subject: &str, issued_offset_secs: i64, expiry_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now + issued_offset_secs,
        exp: now + expiry_offset_secs,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn signup_then_login_then_whoami() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv.signup(&client, "bob", "Str0ng!Pwd").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["username"], "bob");

    let token = srv.login(&client, "bob", "Str0ng!Pwd").await;

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["username"], "bob");
    assert_eq!(body["roles"], json!(["ROLE_USER"]));
}

#[tokio::test]
async fn weak_password_is_rejected_at_signup() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv.signup(&client, "bob", "Weak1").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "weak_password");
}

#[tokio::test]
async fn duplicate_signup_conflicts_regardless_of_case() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    assert_eq!(
        srv.signup(&client, "bob", "Str0ng!Pwd").await.status(),
        StatusCode::CREATED
    );

    let res = srv.signup(&client, "Bob", "Str0ng!Pwd").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "already_exists");
}

#[tokio::test]
async fn login_failure_does_not_leak_user_existence() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.signup(&client, "bob", "Str0ng!Pwd").await;

    let mut bodies = Vec::new();
    for (username, password) in [("bob", "wrong"), ("nouser", "whatever")] {
        let res = client
            .post(format!("{}/auth/login", srv.base_url))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        bodies.push(res.json::<Value>().await.unwrap());
    }

    // Identical code and message for wrong password vs unknown user.
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0]["error"], "authentication_failed");
}

#[tokio::test]
async fn missing_credential_and_missing_role_are_distinct_failures() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.signup(&client, "bob", "Str0ng!Pwd").await;
    let token = srv.login(&client, "bob", "Str0ng!Pwd").await;

    // No Authorization header at all → authentication required.
    let res = client
        .get(format!("{}/users/bob", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "authentication_required");

    // Valid token, but ROLE_USER is not ROLE_ADMIN → access denied.
    let res = client
        .get(format!("{}/users/bob", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "access_denied");
}

#[tokio::test]
async fn expired_token_gets_a_specific_relogin_signal() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.signup(&client, "bob", "Str0ng!Pwd").await;

    let expired = mint_token("bob", -7200, -3600);
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&expired)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "token_expired");
    assert!(body["message"].as_str().unwrap().contains("login again"));
}

#[tokio::test]
async fn garbage_token_is_treated_as_anonymous() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    // Invalid token is absorbed; the guard then reports the missing context.
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "authentication_required");
}

#[tokio::test]
async fn token_for_a_deleted_principal_binds_no_context() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.signup(&client, "alice", "Str0ng!Pwd").await;
    let token = srv.login(&client, "alice", "Str0ng!Pwd").await;

    // Delete alice after issuance; the still-valid token must fail
    // principal re-validation.
    assert!(srv.services.store.delete("alice"));

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "principal_not_found");
}

#[tokio::test]
async fn role_update_validates_names_and_stamps_the_actor() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.signup(&client, "bob", "Str0ng!Pwd").await;
    let admin_token = srv.login(&client, "root", "Adm1n!Pass").await;

    // Unknown role names are rejected listing the offenders.
    let res = client
        .put(format!("{}/users/bob/roles", srv.base_url))
        .bearer_auth(&admin_token)
        .json(&json!({ "roles": ["ROLE_USER", "ROLE_WIZARD"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_role");
    assert!(body["message"].as_str().unwrap().contains("ROLE_WIZARD"));

    // A valid update is stamped with the acting administrator, while the
    // creation stamp keeps the signup process actor.
    let res = client
        .put(format!("{}/users/bob/roles", srv.base_url))
        .bearer_auth(&admin_token)
        .json(&json!({ "roles": ["ROLE_USER", "ROLE_ADMIN"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["createdBy"], "SIGNUP-PROCESS");
    assert_eq!(body["lastModifiedBy"], "root");
    assert_eq!(body["roles"], json!(["ROLE_USER", "ROLE_ADMIN"]));

    // Monotonicity: the added role now grants access to admin endpoints.
    let bob_token = srv.login(&client, "bob", "Str0ng!Pwd").await;
    let res = client
        .get(format!("{}/users/bob", srv.base_url))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn signing_key_misconfiguration_fails_construction() {
    assert!(AppServices::build(b"short", 3600).is_err());
}
