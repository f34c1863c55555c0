use crate::{ConfigError, ConfigErrorResult, DEFAULT_COOKIE_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

/// Attributes of the `accessToken` / `refreshToken` cookies.
/// Both cookies are always HttpOnly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    pub secure: bool,
    pub same_site: SameSitePolicy,
    pub path: String,
    pub domain: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            same_site: SameSitePolicy::Lax,
            path: String::from(DEFAULT_COOKIE_PATH),
            domain: None,
        }
    }
}

impl CookieConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::cookie(format!(
                "cookie.path must start with '/', got '{}'",
                self.path
            )));
        }

        // Browsers drop SameSite=None cookies that are not Secure
        if self.same_site == SameSitePolicy::None && !self.secure {
            return Err(ConfigError::cookie(
                "cookie.same_site = \"none\" requires cookie.secure = true",
            ));
        }

        Ok(())
    }
}
