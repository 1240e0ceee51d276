use axum::{extract::Request, middleware::Next, response::Response};

use crate::{
    authentication::require_authenticated, routes::ApiError,
    session_state::TypedSession,
};

/// Rejects anonymous requests with `401` and hands the session identity to
/// the handler as a request extension.
#[tracing::instrument(
    name = "Middleware Credential Checking",
    skip(session, request, next),
    fields(user_id = tracing::field::Empty)
)]
pub async fn require_login(
    session: TypedSession,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = require_authenticated(&session).await?;
    tracing::Span::current()
        .record("user_id", &tracing::field::display(user.user_id));
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
