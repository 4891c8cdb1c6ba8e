use actix_multipart::{Field, Multipart};
use futures_util::TryStreamExt;

use crate::api::error::UploadError;
use crate::constants::FALLBACK_MIME_TYPE;
use crate::modules::upload::schema::IncomingFile;

fn field_filename(field: &Field) -> Option<&str> {
    field.content_disposition().and_then(|cd| cd.get_filename())
}

/// Builds the descriptor for a multipart file field.
pub fn describe_field(field: &Field) -> Result<IncomingFile, UploadError> {
    let filename = field_filename(field).ok_or(UploadError::MissingFilename)?.to_string();

    // Detect MIME type
    let mime_type = field
        .content_type()
        .map(|m| m.to_string())
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());

    Ok(IncomingFile::new(mime_type, filename))
}

/// Advances to the next field carrying a filename. Plain form fields in
/// between are drained and skipped.
pub async fn next_file(payload: &mut Multipart) -> Result<Option<Field>, UploadError> {
    while let Some(mut field) = payload.try_next().await? {
        if field_filename(&field).is_some() {
            return Ok(Some(field));
        }

        log::debug!("Skipping form field {:?}", field.name());
        while field.try_next().await?.is_some() {}
    }

    Ok(None)
}
