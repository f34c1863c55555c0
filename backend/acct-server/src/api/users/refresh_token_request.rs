use serde::Deserialize;

/// Optional JSON body of `POST /refresh-token`; the cookie takes precedence
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}
