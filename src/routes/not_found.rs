use axum::extract::OriginalUri;

use super::ApiError;

#[tracing::instrument(name = "Unknown route", skip(uri), fields(path = %uri.path()))]
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
