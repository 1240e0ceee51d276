use axum::{extract::State, Json};

use super::{connection, ApiError};
use crate::{
    database::queries, models::WalkerSummary, startup::ApplicationState,
};

#[tracing::instrument(name = "Summarising walkers", skip(app_state))]
pub async fn walker_summary(
    State(app_state): State<ApplicationState>,
) -> Result<Json<Vec<WalkerSummary>>, ApiError> {
    const CONTEXT: &str = "Failed to retrieve walker summary";
    let mut connection = connection(&app_state, CONTEXT).await?;
    let summary = queries::walker_summary(&mut connection)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    Ok(Json(summary))
}
