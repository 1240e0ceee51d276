use anyhow::Context;
use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{
    embed_migrations, EmbeddedMigrations, MigrationHarness,
};
use secrecy::{ExposeSecret, Secret};

use crate::telemetry::spawn_blocking_with_tracing;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Applies every pending migration. The harness is synchronous, so it runs on
/// the blocking pool behind an `AsyncConnectionWrapper`.
#[tracing::instrument(name = "Running pending migrations", skip(url))]
pub async fn run_migrations(url: Secret<String>) -> Result<(), anyhow::Error> {
    spawn_blocking_with_tracing(move || -> Result<(), anyhow::Error> {
        let mut connection =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(
                url.expose_secret(),
            )
            .context("Failed to connect for migrations.")?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to run pending migrations.")?;
        tracing::info!("Applied {} migration(s).", applied.len());
        Ok(())
    })
    .await
    .context("Migration task panicked.")?
}
