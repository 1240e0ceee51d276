use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use secrecy::Secret;
use tracing::instrument;

use crate::{
    authentication::{validate_credentials, Credentials},
    models::UserRecord,
    routes::{connection, ApiError},
    session_state::{SessionUser, TypedSession},
    startup::ApplicationState,
};

#[derive(serde::Deserialize)]
pub struct LoginData {
    username: String,
    password: Secret<String>,
}

#[derive(serde::Serialize)]
pub struct LoginResponse {
    message: &'static str,
    user: UserRecord,
    #[serde(rename = "redirectUrl")]
    redirect_url: &'static str,
}

#[instrument(
    skip(app_state, session, payload),
    fields(username = tracing::field::Empty, user_id = tracing::field::Empty)
)]
pub async fn login(
    State(app_state): State<ApplicationState>,
    session: TypedSession,
    payload: Result<Json<LoginData>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(data) =
        payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let credentials = Credentials {
        username: data.username,
        password: data.password,
    };
    tracing::Span::current()
        .record("username", &tracing::field::display(&credentials.username));

    let mut connection = connection(&app_state, "Login failed").await?;
    let user = validate_credentials(credentials, &mut connection).await?;
    tracing::Span::current()
        .record("user_id", &tracing::field::display(user.user_id));

    session.cycle_id().await.map_err(|e| {
        ApiError::SessionError("Login failed", e.into())
    })?;
    session
        .insert_user(&SessionUser::from(user.clone()))
        .await
        .map_err(|e| ApiError::SessionError("Login failed", e.into()))?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        redirect_url: user.role.dashboard_path(),
        user,
    }))
}
