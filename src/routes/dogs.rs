use axum::{extract::State, Json};

use super::{connection, ApiError};
use crate::{
    database::queries::list_dogs_with_owners, models::DogWithOwner,
    startup::ApplicationState,
};

#[tracing::instrument(name = "Listing dogs with owners", skip(app_state))]
pub async fn list_dogs(
    State(app_state): State<ApplicationState>,
) -> Result<Json<Vec<DogWithOwner>>, ApiError> {
    const CONTEXT: &str = "Failed to retrieve dogs data";
    let mut connection = connection(&app_state, CONTEXT).await?;
    let dogs = list_dogs_with_owners(&mut connection)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    Ok(Json(dogs))
}
