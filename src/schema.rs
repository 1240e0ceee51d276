diesel::table! {
    dogs (dog_id) {
        dog_id -> Int4,
        owner_id -> Int4,
        #[max_length = 10]
        owner_role -> Varchar,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 10]
        size -> Varchar,
    }
}

diesel::table! {
    users (user_id) {
        user_id -> Int4,
        #[max_length = 50]
        username -> Varchar,
        #[max_length = 100]
        email -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        #[max_length = 10]
        role -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    walk_applications (application_id) {
        application_id -> Int4,
        request_id -> Int4,
        walker_id -> Int4,
        #[max_length = 10]
        walker_role -> Varchar,
        applied_at -> Timestamptz,
        #[max_length = 10]
        status -> Varchar,
    }
}

diesel::table! {
    walk_ratings (rating_id) {
        rating_id -> Int4,
        request_id -> Int4,
        walker_id -> Int4,
        #[max_length = 10]
        walker_role -> Varchar,
        owner_id -> Int4,
        #[max_length = 10]
        owner_role -> Varchar,
        rating -> Int4,
        comments -> Nullable<Text>,
        rated_at -> Timestamptz,
    }
}

diesel::table! {
    walk_requests (request_id) {
        request_id -> Int4,
        dog_id -> Int4,
        requested_time -> Timestamp,
        duration_minutes -> Int4,
        #[max_length = 255]
        location -> Varchar,
        #[max_length = 10]
        status -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(dogs -> users (owner_id));
diesel::joinable!(walk_applications -> walk_requests (request_id));
diesel::joinable!(walk_ratings -> walk_requests (request_id));
diesel::joinable!(walk_requests -> dogs (dog_id));

diesel::allow_tables_to_appear_in_same_query!(
    dogs,
    users,
    walk_applications,
    walk_ratings,
    walk_requests,
);
