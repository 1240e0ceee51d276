use axum::{extract::State, Json};

use crate::{
    database::queries::list_users as list_users_query,
    models::UserRecord,
    routes::{connection, ApiError},
    startup::ApplicationState,
};

#[tracing::instrument(name = "Listing users", skip(app_state))]
pub async fn list_users(
    State(app_state): State<ApplicationState>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    const CONTEXT: &str = "Failed to fetch users";
    let mut connection = connection(&app_state, CONTEXT).await?;
    let users = list_users_query(&mut connection)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    Ok(Json(users))
}
