use crate::{PublicUser, User};

#[test]
fn test_public_user_serializes_without_secrets() {
    let mut user = User::new(
        "annlee",
        "ann@x.com",
        "Ann Lee",
        "$argon2id$v=19$secret-hash".to_string(),
        "https://media.local/avatar.png".to_string(),
        Some("https://media.local/cover.png".to_string()),
    );
    user.refresh_token = Some("refresh-token-value".to_string());

    let json = serde_json::to_value(PublicUser::from(&user)).unwrap();
    let object = json.as_object().unwrap();

    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("passwordHash"));
    assert!(!object.contains_key("refreshToken"));
    assert_eq!(json["username"], "annlee");
    assert_eq!(json["fullName"], "Ann Lee");
    assert_eq!(json["coverImage"], "https://media.local/cover.png");
    assert!(!json.to_string().contains("refresh-token-value"));
}
