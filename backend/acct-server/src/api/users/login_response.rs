use acct_core::PublicUser;

use serde::Serialize;

/// Login payload: the user plus the token pair (also set as cookies)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}
