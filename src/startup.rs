use anyhow::Context;
use axum::{
    extract::Request, middleware, routing, serve::Serve, Router,
};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::{fred::prelude::*, RedisStore};
use tracing::info_span;
use uuid::Uuid;

use crate::authentication::middleware::require_login;
use crate::configuration::{SessionSettings, SessionStoreKind, Settings};
use crate::database::{
    create_connection_pool, get_connection, run_migrations,
    seed::seed_sample_data, DatabaseConnectionPool,
};
use crate::routes;

#[derive(Clone)]
pub struct ApplicationState {
    pub database_pool: DatabaseConnectionPool,
}

pub struct Application {
    port: u16,
    server: Serve<Router, Router>,
    pool: DatabaseConnectionPool,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        run_migrations(configuration.database.connection_string()).await?;
        let pool = create_connection_pool(&configuration.database)
            .context("Failed to setup pool")?;
        if configuration.application.seed_sample_data {
            let mut connection = get_connection(&pool).await?;
            seed_sample_data(&mut connection).await?;
        }

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let state = ApplicationState {
            database_pool: pool.clone(),
        };
        let session = &configuration.session;
        let server = match session.store {
            SessionStoreKind::Memory => {
                run(listener, state, MemoryStore::default(), session)
            }
            SessionStoreKind::Redis => {
                let store = redis_session_store(session).await?;
                run(listener, state, store, session)
            }
        };
        tracing::info!("Dog walking API listening on {}", address);
        Ok(Self { port, server, pool })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn pool(&self) -> DatabaseConnectionPool {
        self.pool.clone()
    }

    /// Serves until Ctrl-C, then closes the connection pool.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Shutting down gracefully...");
        self.pool.close();
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn redis_session_store(
    settings: &SessionSettings,
) -> Result<RedisStore<RedisPool>, anyhow::Error> {
    let config = RedisConfig::from_url(settings.redis_uri.expose_secret())
        .context("Invalid redis uri")?;
    let pool =
        RedisPool::new(config, None, None, None, settings.redis_pool_size)
            .context("Failed to build redis pool")?;
    let _connection = pool.connect();
    pool.wait_for_connect()
        .await
        .context("Failed to connect to redis")?;
    Ok(RedisStore::new(pool))
}

pub fn run<Store>(
    listener: TcpListener,
    state: ApplicationState,
    store: Store,
    settings: &SessionSettings,
) -> Serve<Router, Router>
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(settings.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            settings.expiry_hours,
        )));

    let authenticated = Router::new()
        .route("/api/users/me", routing::get(routes::current_user))
        .route("/api/users/dogs", routing::get(routes::owner_dogs))
        .route_layer(middleware::from_fn(require_login));

    let app: Router = Router::new()
        .route("/health_check", routing::get(routes::health_check))
        .route("/api/dogs", routing::get(routes::list_dogs))
        .route(
            "/api/walkrequests/open",
            routing::get(routes::open_walk_requests),
        )
        .route("/api/walkers/summary", routing::get(routes::walker_summary))
        .route("/api/users", routing::get(routes::list_users))
        .route("/api/users/register", routing::post(routes::register))
        .route("/api/users/login", routing::post(routes::login))
        .route("/api/users/logout", routing::post(routes::logout))
        .merge(authenticated)
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(
                    |request: &Request<_>| {
                        let request_id = Uuid::now_v7();
                        info_span!(
                            "Http Request",
                            %request_id,
                            method = %request.method(),
                            request_uri = %request.uri()
                        )
                    },
                ))
                .layer(session_layer),
        )
        .with_state(state);

    axum::serve(listener, app)
}
