use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(Cow<'static, str>),
    #[error("Invalid Filename: {0}")]
    InvalidFilename(Cow<'static, str>),
    #[error("Content type '{mime_type}' does not match extension '{extension}'")]
    MimeExtensionMismatch { mime_type: String, extension: String },
    #[error("Missing filename")]
    MissingFilename,
    // multipart stream errors
    #[error("Multipart Error: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub message: Cow<'static, str>,
}

impl UploadError {
    pub fn unsupported_media_type(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedMediaType(msg.into())
    }

    pub fn invalid_filename(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidFilename(msg.into())
    }

    pub fn mismatch(mime_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::MimeExtensionMismatch { mime_type: mime_type.into(), extension: extension.into() }
    }
}

impl ResponseError for UploadError {
    fn status_code(&self) -> StatusCode {
        // Every variant is a client mistake; the pipeline rejects the upload.
        match *self {
            UploadError::UnsupportedMediaType(_)
            | UploadError::InvalidFilename(_)
            | UploadError::MimeExtensionMismatch { .. }
            | UploadError::MissingFilename
            | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());

        match self {
            // Has Message
            UploadError::UnsupportedMediaType(msg) | UploadError::InvalidFilename(msg) => {
                res.json(ErrorBody { message: msg.clone() })
            }
            UploadError::Multipart(err) => {
                log::error!("Multipart Error: {:?}", err);
                res.json(ErrorBody { message: "Malformed multipart payload".into() })
            }
            // Built from the variant
            _ => res.json(ErrorBody { message: self.to_string().into() }),
        }
    }
}
