use crate::database::QueryError;
use crate::models::{NewUserRow, UserRecord};
use crate::schema::users;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use secrecy::Secret;

#[tracing::instrument(
    name = "Inserting user into database.",
    skip(connection, user),
    fields(username = %user.username, role = %user.role)
)]
pub async fn register_user(
    connection: &mut AsyncPgConnection,
    user: &NewUserRow<'_>,
) -> Result<i32, QueryError> {
    match diesel::insert_into(users::table)
        .values(user)
        .returning(users::user_id)
        .get_result::<i32>(connection)
        .await
        .map_err(QueryError::from)
    {
        Ok(id) => {
            tracing::info!("New user details have been saved");
            Ok(id)
        }
        Err(e) => {
            tracing::warn!("Failed to insert user: {:?}", e);
            Err(e)
        }
    }
}

/// Looks a user up by username, returning the public projection together with
/// the stored password hash.
#[tracing::instrument(name = "Retrieve stored credentials", skip(connection))]
pub async fn find_user_by_username(
    connection: &mut AsyncPgConnection,
    username: &str,
) -> Result<Option<(UserRecord, Secret<String>)>, QueryError> {
    let row: Option<(UserRecord, String)> = users::table
        .filter(users::username.eq(username))
        .select((UserRecord::as_select(), users::password_hash))
        .first(connection)
        .await
        .optional()?;
    Ok(row.map(|(user, hash)| (user, Secret::new(hash))))
}

#[tracing::instrument(name = "List users", skip(connection))]
pub async fn list_users(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<UserRecord>, QueryError> {
    let rows = users::table
        .select(UserRecord::as_select())
        .order(users::user_id.asc())
        .load(connection)
        .await?;
    Ok(rows)
}

#[tracing::instrument(name = "Count users", skip(connection))]
pub async fn count_users(
    connection: &mut AsyncPgConnection,
) -> Result<i64, QueryError> {
    let count = users::table.count().get_result(connection).await?;
    Ok(count)
}
