mod dogs;
mod error;
mod health_check;
mod not_found;
mod users;
mod walk_requests;
mod walkers;

pub use dogs::*;
pub use error::*;
pub use health_check::*;
pub use not_found::*;
pub use users::*;
pub use walk_requests::*;
pub use walkers::*;

use crate::database::{get_connection, DatabaseConnection};
use crate::startup::ApplicationState;

async fn connection(
    app_state: &ApplicationState,
    context: &'static str,
) -> Result<DatabaseConnection, ApiError> {
    get_connection(&app_state.database_pool)
        .await
        .map_err(ApiError::query(context))
}
