use acct_core::User;

/// Creates a test User with sensible defaults
pub fn create_test_user(username: &str, email: &str) -> User {
    User::new(
        username,
        email,
        "Test User",
        "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2g".to_string(),
        format!("https://media.test/{}/avatar.png", username),
        None,
    )
}
