use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::{pooled_connection::deadpool::Object, AsyncPgConnection};

pub mod diesel_configuration;
pub mod migrations;
pub mod queries;
pub mod seed;

pub type DatabaseConnection = Object<AsyncPgConnection>;
pub type DatabaseConnectionPool = Pool<AsyncPgConnection>;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("No database connection became available in time.")]
    ServiceUnavailable(#[source] anyhow::Error),
    #[error("A row with the same unique key already exists.")]
    DuplicateKey(#[source] DieselError),
    #[error("The database rejected the query.")]
    Database(#[source] DieselError),
}

impl From<DieselError> for QueryError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ) => QueryError::DuplicateKey(error),
            other => QueryError::Database(other),
        }
    }
}

#[tracing::instrument(
    name = "Retrieving database connection from pool.",
    skip(pool)
)]
pub async fn get_connection(
    pool: &DatabaseConnectionPool,
) -> Result<DatabaseConnection, QueryError> {
    match pool.get().await {
        Ok(conn) => {
            tracing::debug!("Connection established.");
            Ok(conn)
        }
        Err(e) => {
            tracing::error!(
                "Could not get connection from pool, with error: {:?}",
                e
            );
            Err(QueryError::ServiceUnavailable(e.into()))
        }
    }
}
pub use diesel_configuration::create_connection_pool;
pub use migrations::run_migrations;
