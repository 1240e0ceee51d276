use axum::{extract::State, Json};

use super::{connection, ApiError};
use crate::{
    database::queries::list_open_walk_requests, models::OpenWalkRequest,
    startup::ApplicationState,
};

#[tracing::instrument(name = "Listing open walk requests", skip(app_state))]
pub async fn open_walk_requests(
    State(app_state): State<ApplicationState>,
) -> Result<Json<Vec<OpenWalkRequest>>, ApiError> {
    const CONTEXT: &str = "Failed to retrieve open walk requests";
    let mut connection = connection(&app_state, CONTEXT).await?;
    let requests = list_open_walk_requests(&mut connection)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    Ok(Json(requests))
}
