use sqlx::SqlitePool;

use super::{count_images, insert_image};

pub const SEED_IMAGE_COUNT: i64 = 100;

pub fn placeholder_url(id: i64) -> String {
    format!("https://picsum.photos/id/{}/400/300", id)
}

/// Populates the image catalog when it is empty. Returns the number of images
/// inserted, which is zero once the catalog exists.
pub async fn seed_images(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    if count_images(pool).await? > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for id in 1..=SEED_IMAGE_COUNT {
        insert_image(&mut *tx, id, &placeholder_url(id)).await?;
    }
    tx.commit().await?;

    Ok(SEED_IMAGE_COUNT as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{list_image_votes, test_pool};

    #[tokio::test]
    async fn seeds_one_hundred_placeholder_images() {
        let pool = test_pool().await;

        assert_eq!(seed_images(&pool).await.unwrap(), 100);

        let images = list_image_votes(&pool).await.unwrap();
        assert_eq!(images.len(), 100);
        assert_eq!(images[0].id, 1);
        assert_eq!(images[0].url, "https://picsum.photos/id/1/400/300");
        assert_eq!(images[99].id, 100);
        assert_eq!(images[99].url, "https://picsum.photos/id/100/400/300");
    }

    #[tokio::test]
    async fn seeding_is_skipped_when_images_exist() {
        let pool = test_pool().await;

        assert_eq!(seed_images(&pool).await.unwrap(), 100);
        assert_eq!(seed_images(&pool).await.unwrap(), 0);
        assert_eq!(count_images(&pool).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn existing_catalog_is_left_alone() {
        let pool = test_pool().await;
        insert_image(&pool, 42, "https://example.com/42.jpg").await.unwrap();

        assert_eq!(seed_images(&pool).await.unwrap(), 0);
        assert_eq!(count_images(&pool).await.unwrap(), 1);
    }
}
