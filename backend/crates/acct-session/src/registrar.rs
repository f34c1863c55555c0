use crate::error::MSG_DUPLICATE_USER;
use crate::{RegisterRequest, Result as SessionResult, SessionError};

use acct_auth::hash_password;
use acct_core::{PublicUser, User};
use acct_db::CredentialStore;
use acct_media::{MediaFile, MediaUploader};

use std::sync::Arc;

use log::{info, warn};

const MSG_FIELDS_REQUIRED: &str = "All fields are required";
const MSG_AVATAR_REQUIRED: &str = "Avatar file is required";

/// Creates accounts. Images go to the media host before the user row is written.
pub struct Registrar {
    store: Arc<dyn CredentialStore>,
    uploader: Arc<dyn MediaUploader>,
}

impl Registrar {
    pub fn new(store: Arc<dyn CredentialStore>, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { store, uploader }
    }

    pub async fn register(&self, request: RegisterRequest) -> SessionResult<PublicUser> {
        if request.has_blank_field() {
            return Err(SessionError::validation(MSG_FIELDS_REQUIRED, None));
        }

        let username = User::normalize_username(&request.username);
        let email = User::normalize_email(&request.email);

        if self.store.exists(&username, &email).await? {
            return Err(SessionError::conflict(MSG_DUPLICATE_USER));
        }

        let avatar = request
            .avatar
            .ok_or_else(|| SessionError::validation(MSG_AVATAR_REQUIRED, Some("avatar")))?;

        let avatar_url = self.uploader.upload(avatar).await.map_err(|e| {
            warn!("Avatar upload failed: {}", e);
            SessionError::validation(MSG_AVATAR_REQUIRED, Some("avatar"))
        })?;

        let cover_image_url = match request.cover_image {
            Some(cover_image) => self.upload_cover_image(cover_image).await,
            None => None,
        };

        let password_hash = hash_password(&request.password).await?;

        let user = User::new(
            &username,
            &email,
            &request.full_name,
            password_hash,
            avatar_url.url,
            cover_image_url,
        );

        // UNIQUE constraint still catches a registration racing this one
        self.store.create(&user).await?;

        info!("Registered user {} ({})", user.id, user.username);

        Ok(PublicUser::from(user))
    }

    async fn upload_cover_image(&self, cover_image: MediaFile) -> Option<String> {
        match self.uploader.upload(cover_image).await {
            Ok(uploaded) => Some(uploaded.url),
            Err(e) => {
                warn!("Cover image upload failed, continuing without it: {}", e);
                None
            }
        }
    }
}
