use std::collections::HashMap;

use anyhow::Context;
use chrono::NaiveDateTime;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection};
use secrecy::{ExposeSecret, Secret};

use crate::authentication::hash_password;
use crate::database::queries::{
    count_users, insert_dog, insert_walk_application, insert_walk_rating,
    insert_walk_request, register_user,
};
use crate::domain::{
    ApplicationStatus, DogSize, Password, Role, WalkRequestStatus,
};
use crate::models::{
    NewDog, NewUserRow, NewWalkApplication, NewWalkRating, NewWalkRequest,
};

const USERS: [(&str, &str, &str, Role); 5] = [
    ("alice123", "alice@example.com", "hashed123", Role::Owner),
    ("bobwalker", "bob@example.com", "hashed456", Role::Walker),
    ("carol123", "carol@example.com", "hashed789", Role::Owner),
    ("davidwalker", "david@example.com", "hashed101", Role::Walker),
    ("emilyowner", "emily@example.com", "hashed202", Role::Owner),
];

const DOGS: [(&str, &str, DogSize); 5] = [
    ("alice123", "Max", DogSize::Medium),
    ("carol123", "Bella", DogSize::Small),
    ("alice123", "Charlie", DogSize::Large),
    ("emilyowner", "Luna", DogSize::Medium),
    ("carol123", "Rocky", DogSize::Large),
];

const WALK_REQUESTS: [(&str, &str, i32, &str, WalkRequestStatus); 5] = [
    ("Max", "2025-06-10 08:00:00", 30, "Parklands", WalkRequestStatus::Open),
    (
        "Bella",
        "2025-06-10 09:30:00",
        45,
        "Beachside Ave",
        WalkRequestStatus::Accepted,
    ),
    (
        "Charlie",
        "2025-06-11 07:30:00",
        60,
        "Central Park",
        WalkRequestStatus::Open,
    ),
    (
        "Luna",
        "2025-06-11 16:00:00",
        45,
        "Dog Park North",
        WalkRequestStatus::Completed,
    ),
    (
        "Rocky",
        "2025-06-12 18:00:00",
        30,
        "Riverside Trail",
        WalkRequestStatus::Open,
    ),
];

/// (dog whose request is applied to, walker, status)
const APPLICATIONS: [(&str, &str, ApplicationStatus); 3] = [
    ("Max", "bobwalker", ApplicationStatus::Pending),
    ("Bella", "davidwalker", ApplicationStatus::Accepted),
    ("Luna", "davidwalker", ApplicationStatus::Accepted),
];

/// (dog whose walk is rated, walker, owner, rating, comments)
const RATINGS: [(&str, &str, &str, i32, &str); 2] = [
    (
        "Bella",
        "davidwalker",
        "carol123",
        5,
        "Excellent service! David was very professional and Bella came back happy.",
    ),
    (
        "Luna",
        "davidwalker",
        "emilyowner",
        4,
        "Good walk, Luna seemed tired but satisfied. Would recommend.",
    ),
];

/// Fills an empty database with a small marketplace. Returns `false` without
/// touching anything when users already exist.
#[tracing::instrument(name = "Seeding sample data", skip(connection))]
pub async fn seed_sample_data(
    connection: &mut AsyncPgConnection,
) -> Result<bool, anyhow::Error> {
    let existing = count_users(connection)
        .await
        .context("Failed to count existing users.")?;
    if existing > 0 {
        tracing::info!("Sample data already exists");
        return Ok(false);
    }

    let mut hashes = Vec::with_capacity(USERS.len());
    for (_, _, password, _) in USERS {
        let password = Password::try_from(password.to_string())
            .context("Sample password is invalid.")?;
        hashes.push(hash_password(password).await?);
    }

    connection
        .transaction::<_, anyhow::Error, _>(|conn| {
            async move { insert_sample_rows(conn, &hashes).await }
                .scope_boxed()
        })
        .await?;
    tracing::info!("Sample data inserted successfully");
    Ok(true)
}

async fn insert_sample_rows(
    conn: &mut AsyncPgConnection,
    hashes: &[Secret<String>],
) -> Result<(), anyhow::Error> {
    let mut user_ids = HashMap::new();
    for ((username, email, _, role), hash) in USERS.into_iter().zip(hashes) {
        let row = NewUserRow {
            username,
            email,
            password_hash: hash.expose_secret(),
            role,
        };
        user_ids.insert(username, register_user(conn, &row).await?);
    }

    let mut dog_ids = HashMap::new();
    for (owner, name, size) in DOGS {
        let dog = NewDog {
            owner_id: user_ids[owner],
            name,
            size,
        };
        dog_ids.insert(name, insert_dog(conn, &dog).await?);
    }

    let mut request_ids = HashMap::new();
    for (dog, time, duration_minutes, location, status) in WALK_REQUESTS {
        let request = NewWalkRequest {
            dog_id: dog_ids[dog],
            requested_time: NaiveDateTime::parse_from_str(
                time,
                "%Y-%m-%d %H:%M:%S",
            )
            .context("Sample request time is malformed.")?,
            duration_minutes,
            location,
            status,
        };
        request_ids.insert(dog, insert_walk_request(conn, &request).await?);
    }

    for (dog, walker, status) in APPLICATIONS {
        let application = NewWalkApplication {
            request_id: request_ids[dog],
            walker_id: user_ids[walker],
            status,
        };
        insert_walk_application(conn, &application).await?;
    }

    for (dog, walker, owner, rating, comments) in RATINGS {
        let rating = NewWalkRating {
            request_id: request_ids[dog],
            walker_id: user_ids[walker],
            owner_id: user_ids[owner],
            rating,
            comments: Some(comments),
        };
        insert_walk_rating(conn, &rating).await?;
    }
    Ok(())
}
