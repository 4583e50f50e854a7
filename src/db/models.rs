use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use sqlx::{Executor, Row, Sqlite, SqlitePool};

use crate::error::ApiError;

/// The closed set of votes a client can cast on an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Like,
    Dislike,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Like => "like",
            VoteType::Dislike => "dislike",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact match only: "Like" or " like" are rejected.
        match s {
            "like" => Ok(VoteType::Like),
            "dislike" => Ok(VoteType::Dislike),
            other => Err(ApiError::InvalidVoteType(other.to_string())),
        }
    }
}

/// An image together with its aggregated vote counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageVotes {
    pub id: i64,
    pub url: String,
    pub likes: i64,
    pub dislikes: i64,
}

pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let schema = include_str!("schema.sql");
    sqlx::raw_sql(schema).execute(pool).await?;
    Ok(())
}

pub async fn insert_image<'e, E>(executor: E, id: i64, url: &str) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO images (id, url, created_at) VALUES (?, ?, ?)")
        .bind(id)
        .bind(url)
        .bind(Utc::now().to_rfc3339())
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn count_images(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM images")
        .fetch_one(pool)
        .await
}

pub async fn image_exists(pool: &SqlitePool, image_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM images WHERE id = ?)")
        .bind(image_id)
        .fetch_one(pool)
        .await
}

pub async fn insert_vote(
    pool: &SqlitePool,
    image_id: i64,
    vote_type: VoteType,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO votes (image_id, vote_type, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(image_id)
    .bind(vote_type.as_str())
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Every image with its like/dislike counts, ordered by image id.
pub async fn list_image_votes(pool: &SqlitePool) -> Result<Vec<ImageVotes>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT
            i.id,
            i.url,
            COALESCE(SUM(CASE WHEN v.vote_type = 'like' THEN 1 ELSE 0 END), 0) as likes,
            COALESCE(SUM(CASE WHEN v.vote_type = 'dislike' THEN 1 ELSE 0 END), 0) as dislikes
        FROM images i
        LEFT JOIN votes v ON v.image_id = i.id
        GROUP BY i.id, i.url
        ORDER BY i.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut images = Vec::with_capacity(rows.len());
    for row in rows {
        images.push(ImageVotes {
            id: row.try_get("id")?,
            url: row.try_get("url")?,
            likes: row.try_get("likes")?,
            dislikes: row.try_get("dislikes")?,
        });
    }

    Ok(images)
}

pub async fn delete_all_votes(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM votes").execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
pub(crate) async fn count_votes(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(pool)
        .await
}
