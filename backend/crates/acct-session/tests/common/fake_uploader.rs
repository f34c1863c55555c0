use acct_core::ErrorLocation;
use acct_media::{MediaError, MediaFile, MediaUploader, Result as MediaResult, UploadedMedia};

use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

/// In-memory media host. Files whose name is in `failing` are rejected.
#[derive(Default)]
pub struct FakeUploader {
    failing: Vec<String>,
    uploaded: Mutex<Vec<String>>,
}

impl FakeUploader {
    pub fn failing_on(file_name: &str) -> Self {
        Self {
            failing: vec![file_name.to_string()],
            ..Self::default()
        }
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(&self, file: MediaFile) -> MediaResult<UploadedMedia> {
        if self.failing.contains(&file.file_name) {
            return Err(MediaError::Rejected {
                status: 503,
                message: "media host unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.uploaded.lock().unwrap().push(file.file_name.clone());

        Ok(UploadedMedia {
            url: format!("https://media.test/{}", file.file_name),
        })
    }
}

pub fn image(file_name: &str) -> MediaFile {
    MediaFile {
        file_name: file_name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"png bytes"),
    }
}
