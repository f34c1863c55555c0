//! Avatar and cover image storage on a remote media host.

pub mod error;
pub mod http_media_uploader;
pub mod media_file;
pub mod media_uploader;

pub use error::{MediaError, Result};
pub use http_media_uploader::HttpMediaUploader;
pub use media_file::{MediaFile, UploadedMedia};
pub use media_uploader::MediaUploader;
