use bytes::Bytes;
use serde::Deserialize;

/// An uploaded form file held in memory until it is pushed to the media host
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl MediaFile {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Where the media host stored a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
}

/// Media host reply. Hosts answer with `secure_url`, `url`, or both.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadReply {
    pub secure_url: Option<String>,
    pub url: Option<String>,
}

impl UploadReply {
    pub(crate) fn into_url(self) -> Option<String> {
        self.secure_url
            .or(self.url)
            .filter(|url| !url.trim().is_empty())
    }
}
