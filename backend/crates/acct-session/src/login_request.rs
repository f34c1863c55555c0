use serde::Deserialize;

/// Credentials for `login`. Either identifier may be given; blank counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub(crate) fn username(&self) -> Option<&str> {
        Self::present(&self.username)
    }

    pub(crate) fn email(&self) -> Option<&str> {
        Self::present(&self.email)
    }

    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}
