use acct_core::PublicUser;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: PublicUser,
}
