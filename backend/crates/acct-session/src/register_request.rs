use acct_media::MediaFile;

/// Registration form, as parsed from the multipart body
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<MediaFile>,
    pub cover_image: Option<MediaFile>,
}

impl RegisterRequest {
    pub(crate) fn has_blank_field(&self) -> bool {
        [&self.full_name, &self.email, &self.username, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}
