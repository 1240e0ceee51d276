use axum::{extract::State, Extension, Json};

use crate::{
    authentication::require_role,
    database::queries::list_dogs_for_owner,
    domain::Role,
    models::OwnedDog,
    routes::{connection, ApiError},
    session_state::SessionUser,
    startup::ApplicationState,
};

/// Dogs of the logged-in owner. The owner id always comes from the session.
#[tracing::instrument(
    name = "Listing dogs of the current owner",
    skip(app_state, user),
    fields(user_id = user.user_id)
)]
pub async fn owner_dogs(
    State(app_state): State<ApplicationState>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<Vec<OwnedDog>>, ApiError> {
    require_role(&user, Role::Owner).map_err(|_| {
        ApiError::Forbidden(
            "Only owners can access dog information".to_string(),
        )
    })?;
    const CONTEXT: &str = "Failed to fetch dogs";
    let mut connection = connection(&app_state, CONTEXT).await?;
    let dogs = list_dogs_for_owner(&mut connection, user.user_id)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    Ok(Json(dogs))
}
