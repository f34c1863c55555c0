use crate::ApiResult;

use acct_media::MediaFile;
use acct_session::RegisterRequest;

use axum::extract::Multipart;
use axum::extract::multipart::Field;

/// Collect the registration form. Unknown fields are skipped; an empty file
/// part counts as no file.
pub async fn read_register_form(mut multipart: Multipart) -> ApiResult<RegisterRequest> {
    let mut request = RegisterRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        match name.as_str() {
            "fullName" => request.full_name = field.text().await?,
            "email" => request.email = field.text().await?,
            "username" => request.username = field.text().await?,
            "password" => request.password = field.text().await?,
            "avatar" => request.avatar = read_file(field).await?,
            "coverImage" => request.cover_image = read_file(field).await?,
            other => log::debug!("Ignoring unknown register field '{}'", other),
        }
    }

    Ok(request)
}

async fn read_file(field: Field<'_>) -> ApiResult<Option<MediaFile>> {
    let file_name = field
        .file_name()
        .map(String::from)
        .unwrap_or_else(|| String::from("upload"));
    let content_type = field.content_type().map(String::from);
    let bytes = field.bytes().await?;

    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(MediaFile {
        file_name,
        content_type,
        bytes,
    }))
}
