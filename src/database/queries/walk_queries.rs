use crate::database::QueryError;
use crate::domain::WalkRequestStatus;
use crate::models::{
    NewWalkApplication, NewWalkRating, NewWalkRequest, OpenWalkRequest,
};
use crate::schema::{
    dogs, users, walk_applications, walk_ratings, walk_requests,
};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

#[tracing::instrument(name = "List open walk requests", skip(connection))]
pub async fn list_open_walk_requests(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<OpenWalkRequest>, QueryError> {
    let rows = walk_requests::table
        .inner_join(dogs::table.inner_join(users::table))
        .filter(walk_requests::status.eq(WalkRequestStatus::Open))
        .select((
            walk_requests::request_id,
            dogs::name,
            walk_requests::requested_time,
            walk_requests::duration_minutes,
            walk_requests::location,
            users::username,
        ))
        .order(walk_requests::requested_time.asc())
        .load::<OpenWalkRequest>(connection)
        .await?;
    Ok(rows)
}

#[tracing::instrument(
    name = "Inserting walk request into database.",
    skip(connection, request),
    fields(dog_id = request.dog_id, status = %request.status)
)]
pub async fn insert_walk_request(
    connection: &mut AsyncPgConnection,
    request: &NewWalkRequest<'_>,
) -> Result<i32, QueryError> {
    let id = diesel::insert_into(walk_requests::table)
        .values(request)
        .returning(walk_requests::request_id)
        .get_result(connection)
        .await?;
    Ok(id)
}

#[tracing::instrument(
    name = "Inserting walk application into database.",
    skip(connection, application),
    fields(
        request_id = application.request_id,
        walker_id = application.walker_id
    )
)]
pub async fn insert_walk_application(
    connection: &mut AsyncPgConnection,
    application: &NewWalkApplication,
) -> Result<i32, QueryError> {
    let id = diesel::insert_into(walk_applications::table)
        .values(application)
        .returning(walk_applications::application_id)
        .get_result(connection)
        .await?;
    Ok(id)
}

#[tracing::instrument(
    name = "Inserting walk rating into database.",
    skip(connection, rating),
    fields(request_id = rating.request_id, walker_id = rating.walker_id)
)]
pub async fn insert_walk_rating(
    connection: &mut AsyncPgConnection,
    rating: &NewWalkRating<'_>,
) -> Result<i32, QueryError> {
    let id = diesel::insert_into(walk_ratings::table)
        .values(rating)
        .returning(walk_ratings::rating_id)
        .get_result(connection)
        .await?;
    Ok(id)
}
