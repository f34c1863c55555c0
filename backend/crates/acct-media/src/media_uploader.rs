use crate::{MediaFile, Result as MediaResult, UploadedMedia};

use async_trait::async_trait;

/// Stores a file somewhere reachable by URL
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: MediaFile) -> MediaResult<UploadedMedia>;
}
