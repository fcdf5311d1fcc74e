pub mod cloudinary_client;
pub mod error;
pub mod image_host;
pub mod ingestion;

pub use cloudinary_client::{CloudinaryClient, CloudinaryCredentials};
pub use error::{MediaError, Result};
pub use image_host::{ImageHost, ImagePayload, UploadedImage};
pub use ingestion::{ImageIngestion, UploadBatch};

/// Logical folder every project image is uploaded into
pub const DEFAULT_FOLDER: &str = "projects";
