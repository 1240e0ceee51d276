use crate::database::QueryError;
use crate::models::WalkerSummary;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

// Ratings and applications are aggregated in separate subqueries so that a
// walker with n applications and m ratings is not counted over n * m rows.
const WALKER_SUMMARY_QUERY: &str = r#"
SELECT
    u.username AS walker_username,
    COALESCE(r.total_ratings, 0) AS total_ratings,
    r.average_rating,
    COALESCE(a.completed_walks, 0) AS completed_walks
FROM users u
LEFT JOIN (
    SELECT
        walker_id,
        COUNT(*) AS total_ratings,
        ROUND(AVG(rating), 1)::DOUBLE PRECISION AS average_rating
    FROM walk_ratings
    GROUP BY walker_id
) r ON r.walker_id = u.user_id
LEFT JOIN (
    SELECT
        walker_id,
        COUNT(*) FILTER (WHERE status = $1) AS completed_walks
    FROM walk_applications
    GROUP BY walker_id
) a ON a.walker_id = u.user_id
WHERE u.role = $2
ORDER BY u.username
"#;

#[tracing::instrument(name = "Summarise walker ratings", skip(connection))]
pub async fn walker_summary(
    connection: &mut AsyncPgConnection,
) -> Result<Vec<WalkerSummary>, QueryError> {
    use crate::domain::{ApplicationStatus, Role};
    use diesel::sql_types::Text;

    let rows = diesel::sql_query(WALKER_SUMMARY_QUERY)
        .bind::<Text, _>(ApplicationStatus::Accepted)
        .bind::<Text, _>(Role::Walker)
        .load::<WalkerSummary>(connection)
        .await?;
    Ok(rows)
}
