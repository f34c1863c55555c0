use acct_auth::TokenPair;
use acct_core::PublicUser;

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: PublicUser,
    pub tokens: TokenPair,
}
