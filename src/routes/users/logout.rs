use axum::Json;
use tracing::instrument;

use crate::{routes::ApiError, session_state::TypedSession};

#[derive(serde::Serialize)]
pub struct LogoutResponse {
    message: &'static str,
}

#[instrument(skip(session))]
pub async fn logout(
    session: TypedSession,
) -> Result<Json<LogoutResponse>, ApiError> {
    session
        .logout()
        .await
        .map_err(|e| ApiError::SessionError("Logout failed", e.into()))?;
    Ok(Json(LogoutResponse {
        message: "Logout successful",
    }))
}
