use axum::{Extension, Json};

use crate::session_state::SessionUser;

#[tracing::instrument(name = "Current session identity", skip(user), fields(user_id = user.user_id))]
pub async fn current_user(
    Extension(user): Extension<SessionUser>,
) -> Json<SessionUser> {
    Json(user)
}
