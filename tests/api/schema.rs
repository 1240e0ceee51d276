use crate::helpers::{spawn_app, TestUser};
use chrono::NaiveDate;
use claims::{assert_err, assert_ok};
use dogwalk_service::database::{queries, QueryError};
use dogwalk_service::domain::{ApplicationStatus, DogSize, WalkRequestStatus};
use dogwalk_service::models::{
    NewDog, NewWalkApplication, NewWalkRating, NewWalkRequest,
};

async fn owner_and_walker(app: &crate::helpers::TestApp) -> (i32, i32) {
    let owner = app.register(&TestUser::generate("owner")).await as i32;
    let walker = app.register(&TestUser::generate("walker")).await as i32;
    (owner, walker)
}

fn request(dog_id: i32) -> NewWalkRequest<'static> {
    NewWalkRequest {
        dog_id,
        requested_time: NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        duration_minutes: 30,
        location: "Parklands",
        status: WalkRequestStatus::Open,
    }
}

#[tokio::test]
async fn only_owners_can_own_dogs() {
    let app = spawn_app(false).await;
    let (owner, walker) = owner_and_walker(&app).await;
    let mut connection = app.pool.get().await.unwrap();

    assert_ok!(
        queries::insert_dog(
            &mut connection,
            &NewDog { owner_id: owner, name: "Max", size: DogSize::Medium },
        )
        .await
    );
    assert_err!(
        queries::insert_dog(
            &mut connection,
            &NewDog { owner_id: walker, name: "Rex", size: DogSize::Small },
        )
        .await
    );
}

#[tokio::test]
async fn ratings_must_be_between_one_and_five_and_unique_per_request() {
    let app = spawn_app(false).await;
    let (owner, walker) = owner_and_walker(&app).await;
    let mut connection = app.pool.get().await.unwrap();
    let dog_id = queries::insert_dog(
        &mut connection,
        &NewDog { owner_id: owner, name: "Max", size: DogSize::Medium },
    )
    .await
    .unwrap();
    let request_id = queries::insert_walk_request(&mut connection, &request(dog_id))
        .await
        .unwrap();
    let rating = |rating| NewWalkRating {
        request_id,
        walker_id: walker,
        owner_id: owner,
        rating,
        comments: None,
    };

    assert_err!(queries::insert_walk_rating(&mut connection, &rating(0)).await);
    assert_err!(queries::insert_walk_rating(&mut connection, &rating(6)).await);
    assert_ok!(queries::insert_walk_rating(&mut connection, &rating(5)).await);
    let duplicate = queries::insert_walk_rating(&mut connection, &rating(4)).await;
    assert!(matches!(duplicate, Err(QueryError::DuplicateKey(_))));
}

#[tokio::test]
async fn a_walker_applies_to_a_request_at_most_once() {
    let app = spawn_app(false).await;
    let (owner, walker) = owner_and_walker(&app).await;
    let mut connection = app.pool.get().await.unwrap();
    let dog_id = queries::insert_dog(
        &mut connection,
        &NewDog { owner_id: owner, name: "Luna", size: DogSize::Large },
    )
    .await
    .unwrap();
    let request_id = queries::insert_walk_request(&mut connection, &request(dog_id))
        .await
        .unwrap();
    let application = |walker_id| NewWalkApplication {
        request_id,
        walker_id,
        status: ApplicationStatus::Pending,
    };

    assert_ok!(
        queries::insert_walk_application(&mut connection, &application(walker)).await
    );
    let duplicate =
        queries::insert_walk_application(&mut connection, &application(walker)).await;
    assert!(matches!(duplicate, Err(QueryError::DuplicateKey(_))));
    assert_err!(
        queries::insert_walk_application(&mut connection, &application(owner)).await
    );
}
