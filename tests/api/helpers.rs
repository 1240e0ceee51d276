use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use dogwalk_service::configuration::{
    get_configuration, DatabaseSettings, SessionStoreKind,
};
use dogwalk_service::database::DatabaseConnectionPool;
use dogwalk_service::startup::Application;
use dogwalk_service::telemetry::setup_tracing;
use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use std::future::IntoFuture;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        setup_tracing("test", default_filter, std::io::stdout);
    } else {
        setup_tracing("test", default_filter, std::io::sink);
    }
});

pub struct TestUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: &'static str,
}

impl TestUser {
    pub fn generate(role: &'static str) -> Self {
        let username = format!("user-{}", &Uuid::now_v7().simple().to_string()[20..]);
        Self {
            email: format!("{}@example.com", username),
            username,
            password: Uuid::now_v7().to_string(),
            role,
        }
    }

    pub fn registration_body(&self) -> serde_json::Value {
        serde_json::json!({
            "username": &self.username,
            "email": &self.email,
            "password": &self.password,
            "role": self.role,
        })
    }

    pub fn login_body(&self) -> serde_json::Value {
        serde_json::json!({
            "username": &self.username,
            "password": &self.password,
        })
    }
}

pub struct TestApp {
    pub address: String,
    pub pool: DatabaseConnectionPool,
    pub api_client: Client,
}

impl TestApp {
    /// Fresh client without the shared cookie jar, i.e. a second browser.
    pub fn new_client(&self) -> Client {
        Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build client")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.get_with(&self.api_client, path).await
    }

    pub async fn get_with(&self, client: &Client, path: &str) -> reqwest::Response {
        client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self.get(path).await;
        assert_eq!(200, response.status().as_u16(), "GET {} failed", path);
        response.json().await.expect("Body was not JSON")
    }

    pub async fn post_register(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/users/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_login_with(&self.api_client, body).await
    }

    pub async fn post_login_with(
        &self,
        client: &Client,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        client
            .post(&format!("{}/api/users/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/users/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers `user` and returns the id the API assigned.
    pub async fn register(&self, user: &TestUser) -> i64 {
        let response = self.post_register(&user.registration_body()).await;
        assert_eq!(201, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        body["user_id"].as_i64().expect("user_id missing")
    }
}

pub async fn spawn_app(seed_sample_data: bool) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("failed to get configuration");
        c.database.database_name = Uuid::now_v7().to_string();
        c.application.port = 0;
        c.application.seed_sample_data = seed_sample_data;
        c.session.store = SessionStoreKind::Memory;
        c.session.secure_cookie = false;
        c
    };

    configure_database(&configuration.database).await;

    let application = Application::build(configuration)
        .await
        .expect("Failed to build app.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let pool = application.pool();
    tokio::spawn(application.run_until_stopped().into_future());

    let api_client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .expect("Failed to build client");
    TestApp {
        address,
        pool,
        api_client,
    }
}

async fn configure_database(db_settings: &DatabaseSettings) {
    let mut db_conn = AsyncPgConnection::establish(
        db_settings
            .connection_string_without_database()
            .expose_secret(),
    )
    .await
    .expect("Failed to connect");
    diesel::sql_query(format!(
        r#"CREATE DATABASE "{}";"#,
        db_settings.database_name
    ))
    .execute(&mut db_conn)
    .await
    .expect("Failed to create database");
}

/// Names of the dogs owned by `username`, read straight from the database.
pub async fn dogs_of(app: &TestApp, owner: &str) -> Vec<String> {
    use dogwalk_service::schema::{dogs, users};
    let mut connection = app.pool.get().await.expect("No connection");
    dogs::table
        .inner_join(users::table)
        .filter(users::username.eq(owner))
        .select(dogs::name)
        .order(dogs::name.asc())
        .load(&mut connection)
        .await
        .expect("Failed to read dogs")
}
