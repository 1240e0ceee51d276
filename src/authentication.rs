use anyhow::Context;
use argon2::{
    password_hash::SaltString, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier,
};
use diesel_async::AsyncPgConnection;
use secrecy::{ExposeSecret, Secret};

use crate::{
    database::{queries::find_user_by_username, QueryError},
    domain::{Password, Role},
    models::UserRecord,
    session_state::{SessionUser, TypedSession},
    telemetry::spawn_blocking_with_tracing,
};

pub mod middleware;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AccessError {
    #[error("Not logged in.")]
    Unauthorized,
    #[error("This resource requires the {required} role.")]
    Forbidden { required: Role },
    #[error("Could not read session state.")]
    SessionError(#[source] anyhow::Error),
}

pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// Returns the identity stored in the session, or `Unauthorized` for an
/// anonymous session.
#[tracing::instrument(name = "Require authenticated session", skip(session))]
pub async fn require_authenticated(
    session: &TypedSession,
) -> Result<SessionUser, AccessError> {
    session
        .get_user()
        .await
        .context("Could not confirm user login")
        .map_err(AccessError::SessionError)?
        .ok_or(AccessError::Unauthorized)
}

pub fn require_role(user: &SessionUser, role: Role) -> Result<(), AccessError> {
    if user.role == role {
        Ok(())
    } else {
        tracing::info!(
            user_id = user.user_id,
            role = %user.role,
            "Rejected access requiring the {} role",
            role
        );
        Err(AccessError::Forbidden { required: role })
    }
}

/// Placeholder compared against when the username is unknown, so both paths
/// pay for one argon2 verification.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

#[tracing::instrument(
    name = "Validate Credentials",
    skip(connection, credentials),
    fields(username = %credentials.username)
)]
pub async fn validate_credentials(
    credentials: Credentials,
    connection: &mut AsyncPgConnection,
) -> Result<UserRecord, AuthError> {
    let (user, expected_hash) =
        match find_user_by_username(connection, &credentials.username).await? {
            Some((user, hash)) => (Some(user), hash),
            None => (None, Secret::new(DUMMY_PASSWORD_HASH.to_string())),
        };

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")
    .map_err(AuthError::UnexpectedError)??;

    user.ok_or_else(|| {
        AuthError::InvalidCredentials(anyhow::anyhow!("Unknown username."))
    })
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<(), AuthError> {
    let expected_hash =
        PasswordHash::new(expected_password_hash.expose_secret())
            .context("Failed to parse hash in PHC format.")
            .map_err(AuthError::UnexpectedError)?;
    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_hash,
        )
        .context("Invalid password.")
        .map_err(AuthError::InvalidCredentials)?;
    Ok(())
}

/// Salts and hashes `password` on the blocking pool.
#[tracing::instrument(name = "Hash password", skip(password))]
pub async fn hash_password(
    password: Password,
) -> Result<Secret<String>, anyhow::Error> {
    spawn_blocking_with_tracing(move || compute_password_hash(&password))
        .await?
        .context("Failed to hash password.")
}

fn compute_password_hash(
    password: &Password,
) -> Result<Secret<String>, anyhow::Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid argon2 parameters.")?;
    let password_hash = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    )
    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
    .map_err(|e| anyhow::anyhow!(e))?
    .to_string();
    Ok(Secret::new(password_hash))
}
