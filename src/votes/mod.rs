pub mod export;
pub mod handlers;

pub use handlers::{cast_vote, export_votes, health_check, list_images, reset_votes};
