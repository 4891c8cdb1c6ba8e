use actix_web::HttpRequest;

use crate::api::error::UploadError;
use crate::modules::upload::{
    model::UploadConfig,
    schema::{AcceptedUpload, IncomingFile},
};
use crate::utils::{base_name, is_alphanumeric, normalize_mime, split_extension};

/// Accept/reject outcome of [`UploadValidator::file_filter`]
pub type Decision = Result<(), UploadError>;

#[derive(Debug, Clone, Default)]
pub struct UploadValidator {
    config: UploadConfig,
}

impl UploadValidator {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(UploadConfig::default())
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Checks the declared MIME type against the allow-list.
    ///
    /// The request is not inspected; it is taken so the filter slots into a
    /// handler that has one at hand.
    pub fn file_filter(&self, _req: &HttpRequest, file: &IncomingFile) -> Decision {
        let mime_type = normalize_mime(&file.mimetype);

        if mime_type.is_empty() || !self.config.allows_mime_type(&mime_type) {
            log::warn!(
                "Rejected upload {:?}: file type {:?} is not allowed",
                file.originalname,
                file.mimetype
            );
            return Err(UploadError::unsupported_media_type(format!(
                "File type '{}' is not allowed",
                file.mimetype
            )));
        }

        log::debug!("Accepted file type {} for {:?}", mime_type, file.originalname);
        Ok(())
    }

    /// Lowercased extension of `originalname`, if it is well formed and
    /// allowed. Deterministic for a given name.
    pub fn extension_of(&self, file: &IncomingFile) -> Result<String, UploadError> {
        let name = base_name(&file.originalname);

        let (_, extension) = split_extension(name)
            .ok_or_else(|| UploadError::invalid_filename("Missing file extension"))?;

        if !is_alphanumeric(extension) {
            return Err(UploadError::invalid_filename(
                "File extension contains invalid characters",
            ));
        }

        let extension = extension.to_ascii_lowercase();
        if !self.config.allows_extension(&extension) {
            return Err(UploadError::invalid_filename(format!(
                "File extension '{}' is not allowed",
                extension
            )));
        }

        Ok(extension)
    }

    /// Generate unique filename
    pub fn generate_filename(&self, file: &IncomingFile) -> Result<String, UploadError> {
        match self.extension_of(file) {
            Ok(extension) => Ok(self.compose(&extension)),
            Err(e) => {
                log::warn!("Rejected upload {:?}: {}", file.originalname, e);
                Err(e)
            }
        }
    }

    /// Runs every check and names the file.
    ///
    /// Order: MIME allow-list, extension, then the MIME/extension cross-check
    /// when enabled.
    pub fn inspect(
        &self,
        req: &HttpRequest,
        file: &IncomingFile,
    ) -> Result<AcceptedUpload, UploadError> {
        self.file_filter(req, file)?;

        let mime_type = normalize_mime(&file.mimetype);
        let extension = self.extension_of(file)?;

        if self.config.verify_extension_matches_mime
            && !extension_matches_mime(&extension, &mime_type)
        {
            log::warn!(
                "Rejected upload {:?}: {} does not match extension {}",
                file.originalname,
                mime_type,
                extension
            );
            return Err(UploadError::mismatch(mime_type, extension));
        }

        Ok(AcceptedUpload {
            filename: self.compose(&extension),
            original_filename: file.originalname.clone(),
            mime_type,
            extension,
        })
    }

    fn compose(&self, extension: &str) -> String {
        format!("{}.{}", self.config.naming.generate(), extension)
    }
}

fn extension_matches_mime(extension: &str, mime_type: &str) -> bool {
    mime_guess::from_ext(extension).iter().any(|m| m.essence_str() == mime_type)
}
