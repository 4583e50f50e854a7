use crate::db::ImageVotes;
use crate::error::ApiError;

pub const CSV_HEADER: [&str; 4] = ["image_id", "url", "likes", "dislikes"];

/// Renders one row per image, header first, in the order given.
pub fn render_csv(images: &[ImageVotes]) -> Result<Vec<u8>, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for image in images {
        writer.write_record([
            image.id.to_string(),
            image.url.clone(),
            image.likes.to_string(),
            image.dislikes.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ApiError::Io(e.into_error()))
}
