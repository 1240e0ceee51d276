use crate::helpers::{spawn_app, TestUser};

fn alice() -> serde_json::Value {
    serde_json::json!({ "username": "alice123", "password": "hashed123" })
}

#[tokio::test]
async fn owners_are_pointed_at_the_owner_dashboard() {
    let app = spawn_app(true).await;

    let response = app.post_login(&alice()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["redirectUrl"], "/owner-dashboard.html");
    assert_eq!(body["user"]["username"], "alice123");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "owner");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn walkers_are_pointed_at_the_walker_dashboard() {
    let app = spawn_app(false).await;
    let walker = TestUser::generate("walker");
    let user_id = app.register(&walker).await;

    let response = app.post_login(&walker.login_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["redirectUrl"], "/walker-dashboard.html");
    assert_eq!(body["user"]["user_id"], user_id);
}

#[tokio::test]
async fn a_wrong_password_is_rejected() {
    let app = spawn_app(true).await;
    let body = serde_json::json!({ "username": "alice123", "password": "hashed456" });

    let response = app.post_login(&body).await;

    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Invalid credentials" }));
    assert_eq!(401, app.get("/api/users/me").await.status().as_u16());
}

#[tokio::test]
async fn an_unknown_username_is_rejected_the_same_way() {
    let app = spawn_app(true).await;
    let body = serde_json::json!({ "username": "nobody", "password": "hashed123" });

    let response = app.post_login(&body).await;

    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn a_malformed_login_body_is_a_bad_request() {
    let app = spawn_app(false).await;

    let response = app
        .post_login(&serde_json::json!({ "username": "alice123" }))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn the_session_identity_is_only_visible_after_login() {
    let app = spawn_app(true).await;

    let response = app.get("/api/users/me").await;
    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Not logged in" }));

    app.post_login(&alice()).await;
    let me = app.get_json("/api/users/me").await;
    assert_eq!(me["username"], "alice123");
    assert_eq!(me["email"], "alice@example.com");
    assert_eq!(me["role"], "owner");
    assert!(me["user_id"].is_i64());
}

#[tokio::test]
async fn sessions_are_not_shared_between_clients() {
    let app = spawn_app(true).await;
    app.post_login(&alice()).await;

    let other = app.new_client();
    let response = app.get_with(&other, "/api/users/me").await;

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn logging_in_again_replaces_the_identity() {
    let app = spawn_app(true).await;
    app.post_login(&alice()).await;

    let carol = serde_json::json!({ "username": "carol123", "password": "hashed789" });
    assert_eq!(200, app.post_login(&carol).await.status().as_u16());

    let me = app.get_json("/api/users/me").await;
    assert_eq!(me["username"], "carol123");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = spawn_app(true).await;
    app.post_login(&alice()).await;
    assert_eq!(200, app.get("/api/users/me").await.status().as_u16());

    let response = app.post_logout().await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Logout successful" }));
    assert_eq!(401, app.get("/api/users/me").await.status().as_u16());
    assert_eq!(401, app.get("/api/users/dogs").await.status().as_u16());
}

#[tokio::test]
async fn logout_without_a_session_still_succeeds() {
    let app = spawn_app(false).await;

    let response = app.post_logout().await;

    assert_eq!(200, response.status().as_u16());
}
