use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MEDIA_TIMEOUT_SECS, MAX_MEDIA_TIMEOUT_SECS,
    MIN_MEDIA_TIMEOUT_SECS,
};

use std::fmt;

use serde::Deserialize;

/// Remote media host that stores avatars and cover images.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub upload_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_url: None,
            api_key: None,
            timeout_secs: DEFAULT_MEDIA_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaConfig")
            .field("upload_url", &self.upload_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MediaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.upload_url.as_deref() {
            None => return Err(ConfigError::media("media.upload_url is required")),
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                return Err(ConfigError::media(format!(
                    "media.upload_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
            Some(_) => {}
        }

        if self.timeout_secs < MIN_MEDIA_TIMEOUT_SECS || self.timeout_secs > MAX_MEDIA_TIMEOUT_SECS
        {
            return Err(ConfigError::media(format!(
                "media.timeout_secs must be {}-{}, got {}",
                MIN_MEDIA_TIMEOUT_SECS, MAX_MEDIA_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
