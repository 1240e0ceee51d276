use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text};

use crate::domain::{ApplicationStatus, DogSize, Role, WalkRequestStatus};
use crate::schema::{
    dogs, users, walk_applications, walk_ratings, walk_requests,
};

/// Public projection of a user; never carries the password hash.
#[derive(Queryable, Selectable, serde::Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecord {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
}

#[derive(Insertable)]
#[diesel(table_name = dogs)]
pub struct NewDog<'a> {
    pub owner_id: i32,
    pub name: &'a str,
    pub size: DogSize,
}

#[derive(Insertable)]
#[diesel(table_name = walk_requests)]
pub struct NewWalkRequest<'a> {
    pub dog_id: i32,
    pub requested_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: &'a str,
    pub status: WalkRequestStatus,
}

#[derive(Insertable)]
#[diesel(table_name = walk_applications)]
pub struct NewWalkApplication {
    pub request_id: i32,
    pub walker_id: i32,
    pub status: ApplicationStatus,
}

#[derive(Insertable)]
#[diesel(table_name = walk_ratings)]
pub struct NewWalkRating<'a> {
    pub request_id: i32,
    pub walker_id: i32,
    pub owner_id: i32,
    pub rating: i32,
    pub comments: Option<&'a str>,
}

#[derive(Queryable, serde::Serialize, Debug, Clone, PartialEq)]
pub struct DogWithOwner {
    pub dog_name: String,
    pub size: DogSize,
    pub owner_username: String,
}

#[derive(Queryable, Selectable, serde::Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = dogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OwnedDog {
    pub dog_id: i32,
    pub name: String,
    pub size: DogSize,
}

#[derive(Queryable, serde::Serialize, Debug, Clone, PartialEq)]
pub struct OpenWalkRequest {
    pub request_id: i32,
    pub dog_name: String,
    pub requested_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
    pub owner_username: String,
}

/// One row of the walker rating report.
///
/// `average_rating` is `None` whenever `total_ratings` is zero.
#[derive(QueryableByName, serde::Serialize, Debug, Clone, PartialEq)]
pub struct WalkerSummary {
    #[diesel(sql_type = Text)]
    pub walker_username: String,
    #[diesel(sql_type = BigInt)]
    pub total_ratings: i64,
    #[diesel(sql_type = Nullable<Double>)]
    pub average_rating: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub completed_walks: i64,
}
