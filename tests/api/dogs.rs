use crate::helpers::{dogs_of, spawn_app};

#[tokio::test]
async fn dogs_are_listed_by_name_with_their_owner() {
    let app = spawn_app(true).await;

    let body = app.get_json("/api/dogs").await;

    assert_eq!(
        body,
        serde_json::json!([
            { "dog_name": "Bella", "size": "small", "owner_username": "carol123" },
            { "dog_name": "Charlie", "size": "large", "owner_username": "alice123" },
            { "dog_name": "Luna", "size": "medium", "owner_username": "emilyowner" },
            { "dog_name": "Max", "size": "medium", "owner_username": "alice123" },
            { "dog_name": "Rocky", "size": "large", "owner_username": "carol123" },
        ])
    );
}

#[tokio::test]
async fn an_empty_database_lists_no_dogs() {
    let app = spawn_app(false).await;

    let body = app.get_json("/api/dogs").await;

    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn owners_only_see_their_own_dogs() {
    let app = spawn_app(true).await;

    let login = serde_json::json!({ "username": "alice123", "password": "hashed123" });
    assert_eq!(200, app.post_login(&login).await.status().as_u16());

    let body = app.get_json("/api/users/dogs").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|dog| dog["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, dogs_of(&app, "alice123").await);
    assert_eq!(names, vec!["Charlie", "Max"]);
    for dog in body.as_array().unwrap() {
        assert!(dog["dog_id"].is_i64());
        assert!(dog["size"].is_string());
    }
}

#[tokio::test]
async fn owner_dogs_ignore_a_caller_supplied_owner() {
    let app = spawn_app(true).await;
    let login = serde_json::json!({ "username": "carol123", "password": "hashed789" });
    app.post_login(&login).await;

    let body = app
        .get("/api/users/dogs?owner_id=1&user_id=1")
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|dog| dog["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bella", "Rocky"]);
}

#[tokio::test]
async fn owner_dogs_require_a_session() {
    let app = spawn_app(true).await;

    let response = app.get("/api/users/dogs").await;

    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Not logged in" }));
}

#[tokio::test]
async fn walkers_cannot_list_owner_dogs() {
    let app = spawn_app(true).await;
    let login = serde_json::json!({ "username": "bobwalker", "password": "hashed456" });
    app.post_login(&login).await;

    let response = app.get("/api/users/dogs").await;

    assert_eq!(403, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Only owners can access dog information" })
    );
}
