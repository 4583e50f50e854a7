pub mod models;
pub mod seed;

pub use models::{
    count_images, delete_all_votes, image_exists, init_db, insert_image, insert_vote,
    list_image_votes, ImageVotes, VoteType,
};
pub use seed::seed_images;

#[cfg(test)]
pub(crate) use models::count_votes;

/// In-memory database with the schema applied. A single connection keeps the
/// database alive for the lifetime of the pool.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    init_db(&pool).await.expect("failed to apply schema");
    pool
}
