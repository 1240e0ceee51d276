use crate::database::QueryError;
use crate::models::{DogWithOwner, NewDog, OwnedDog};
use crate::schema::{dogs, users};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

#[tracing::instrument(name = "List dogs with their owners", skip(connection))]
pub async fn list_dogs_with_owners(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<DogWithOwner>, QueryError> {
    let rows = dogs::table
        .inner_join(users::table)
        .select((dogs::name, dogs::size, users::username))
        .order(dogs::name.asc())
        .load::<DogWithOwner>(connection)
        .await?;
    Ok(rows)
}

/// Dogs belonging to `owner_id` only. Callers pass the id of the
/// authenticated owner, never one taken from the request.
#[tracing::instrument(name = "List dogs for owner", skip(connection))]
pub async fn list_dogs_for_owner(
    connection: &mut AsyncPgConnection,
    owner_id: i32,
) -> Result<Vec<OwnedDog>, QueryError> {
    let rows = dogs::table
        .filter(dogs::owner_id.eq(owner_id))
        .select(OwnedDog::as_select())
        .order(dogs::name.asc())
        .load(connection)
        .await?;
    Ok(rows)
}

#[tracing::instrument(
    name = "Inserting dog into database.",
    skip(connection, dog),
    fields(dog_name = %dog.name, owner_id = dog.owner_id)
)]
pub async fn insert_dog(
    connection: &mut AsyncPgConnection,
    dog: &NewDog<'_>,
) -> Result<i32, QueryError> {
    let id = diesel::insert_into(dogs::table)
        .values(dog)
        .returning(dogs::dog_id)
        .get_result(connection)
        .await?;
    Ok(id)
}
