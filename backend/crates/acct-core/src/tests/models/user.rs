use crate::{CoreError, User};

fn sample_user() -> User {
    User::new(
        "  AnnLee ",
        "Ann@X.com ",
        " Ann Lee",
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        "https://media.local/avatar.png".to_string(),
        None,
    )
}

#[test]
fn test_user_new_normalizes_identifiers() {
    let user = sample_user();

    assert_eq!(user.username, "annlee");
    assert_eq!(user.email, "ann@x.com");
    assert_eq!(user.full_name, "Ann Lee");
    assert_eq!(user.created_at, user.updated_at);
    assert!(!user.has_session());
}

#[test]
fn test_user_holds_refresh_token() {
    let mut user = sample_user();
    assert!(!user.holds_refresh_token("abc"));

    user.refresh_token = Some("abc".to_string());
    assert!(user.has_session());
    assert!(user.holds_refresh_token("abc"));
    assert!(!user.holds_refresh_token("abcd"));
    assert!(!user.holds_refresh_token(""));
}

#[test]
fn test_user_debug_redacts_secrets() {
    let mut user = sample_user();
    user.refresh_token = Some("live-refresh-token".to_string());

    let rendered = format!("{:?}", user);

    assert!(!rendered.contains("argon2id"));
    assert!(!rendered.contains("live-refresh-token"));
    assert!(rendered.contains("annlee"));
}

#[test]
fn test_parse_id_rejects_garbage() {
    let result = User::parse_id("not-a-uuid");
    assert!(matches!(result, Err(CoreError::Uuid { .. })));

    let user = sample_user();
    assert_eq!(User::parse_id(&user.id.to_string()).unwrap(), user.id);
}
