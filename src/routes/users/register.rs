use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use secrecy::{ExposeSecret, Secret};

use crate::{
    authentication::hash_password,
    database::queries::register_user,
    domain::NewUser,
    models::NewUserRow,
    routes::{connection, ApiError},
    startup::ApplicationState,
};

#[derive(serde::Deserialize)]
pub struct RegistrationData {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
    pub role: String,
}

#[derive(serde::Serialize)]
pub struct RegistrationResponse {
    message: &'static str,
    user_id: i32,
}

#[tracing::instrument(
    name = "Registering a new user",
    skip(app_state, payload),
    fields(username = tracing::field::Empty, user_id = tracing::field::Empty)
)]
pub async fn register(
    State(app_state): State<ApplicationState>,
    payload: Result<Json<RegistrationData>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let Json(data) =
        payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_user: NewUser = data
        .try_into()
        .map_err(|e: crate::domain::InvalidUser| {
            ApiError::BadRequest(e.to_string())
        })?;
    tracing::Span::current().record(
        "username",
        &tracing::field::display(new_user.username.as_ref()),
    );

    const CONTEXT: &str = "Registration failed";
    let password_hash = hash_password(new_user.password.clone())
        .await
        .map_err(|e| ApiError::UnexpectedError(CONTEXT, e))?;
    let row = NewUserRow {
        username: new_user.username.as_ref(),
        email: new_user.email.as_ref(),
        password_hash: password_hash.expose_secret(),
        role: new_user.role,
    };
    let mut connection = connection(&app_state, CONTEXT).await?;
    let user_id = register_user(&mut connection, &row)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    tracing::Span::current()
        .record("user_id", &tracing::field::display(user_id));
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            message: "User registered",
            user_id,
        }),
    ))
}
