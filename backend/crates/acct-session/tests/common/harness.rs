use crate::common::{FakeUploader, image};

use acct_auth::{TokenIssuer, TokenPolicy};
use acct_core::PublicUser;
use acct_db::{Database, UserRepository};
use acct_session::{LoginRequest, RegisterRequest, Registrar, SessionCoordinator};

use std::sync::Arc;
use std::time::Duration;

pub const PASSWORD: &str = "p4ss";

pub struct Harness {
    pub store: Arc<UserRepository>,
    pub issuer: Arc<TokenIssuer>,
    pub uploader: Arc<FakeUploader>,
    pub registrar: Registrar,
    pub sessions: SessionCoordinator,
}

pub fn test_policy() -> TokenPolicy {
    TokenPolicy {
        access_secret: "access-secret-key-at-least-32-bytes!".to_string(),
        access_ttl: Duration::from_secs(15 * 60),
        refresh_secret: "refresh-secret-key-at-least-32-bytes".to_string(),
        refresh_ttl: Duration::from_secs(10 * 24 * 3600),
    }
}

pub async fn harness() -> Harness {
    harness_with_uploader(FakeUploader::default()).await
}

pub async fn harness_with_uploader(uploader: FakeUploader) -> Harness {
    let pool = Database::in_memory()
        .await
        .expect("Failed to create test pool");

    let store = Arc::new(UserRepository::new(pool));
    let issuer = Arc::new(TokenIssuer::new(&test_policy()));
    let uploader = Arc::new(uploader);

    let registrar = Registrar::new(store.clone(), uploader.clone());
    let sessions = SessionCoordinator::new(store.clone(), issuer.clone());

    Harness {
        store,
        issuer,
        uploader,
        registrar,
        sessions,
    }
}

pub fn register_request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        full_name: "Ann Lee".to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: PASSWORD.to_string(),
        avatar: Some(image("avatar.png")),
        cover_image: None,
    }
}

pub fn login_by_username(username: &str) -> LoginRequest {
    LoginRequest {
        username: Some(username.to_string()),
        email: None,
        password: PASSWORD.to_string(),
    }
}

impl Harness {
    pub async fn register_ann(&self) -> PublicUser {
        self.registrar
            .register(register_request("annlee", "ann@x.com"))
            .await
            .expect("registration failed")
    }
}
