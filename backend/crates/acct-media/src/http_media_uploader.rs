use crate::media_file::UploadReply;
use crate::{MediaError, MediaFile, MediaUploader, Result as MediaResult, UploadedMedia};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use reqwest::multipart::{Form, Part};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Multipart POST uploader for a Cloudinary-style media host
pub struct HttpMediaUploader {
    upload_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpMediaUploader {
    pub fn new(upload_url: &str, api_key: Option<&str>, timeout: Duration) -> MediaResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            upload_url: upload_url.to_string(),
            api_key: api_key.map(String::from),
            client,
        })
    }

    #[track_caller]
    fn form(file: MediaFile) -> MediaResult<Form> {
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
        if let Some(ref content_type) = file.content_type {
            part = part.mime_str(content_type)?;
        }

        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl MediaUploader for HttpMediaUploader {
    async fn upload(&self, file: MediaFile) -> MediaResult<UploadedMedia> {
        if file.is_empty() {
            return Err(MediaError::InvalidFile {
                message: format!("'{}' is empty", file.file_name),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(
            "Uploading '{}' ({} bytes) to media host",
            file.file_name,
            file.bytes.len()
        );

        let mut req = self.client.post(&self.upload_url).multipart(Self::form(file)?);
        if let Some(ref api_key) = self.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!("Media host rejected upload with {}: {}", status, message);
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let reply: UploadReply = response.json().await?;
        let url = reply.into_url().ok_or_else(|| MediaError::MissingUrl {
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(UploadedMedia { url })
    }
}
