use serde::{Deserialize, Serialize};

/// Client-supplied description of one uploaded file. Both fields are
/// untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingFile {
    pub mimetype: String,
    pub originalname: String,
}

impl IncomingFile {
    pub fn new(mimetype: impl Into<String>, originalname: impl Into<String>) -> Self {
        Self { mimetype: mimetype.into(), originalname: originalname.into() }
    }
}

/// A file that passed every check, ready for the pipeline to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedUpload {
    pub filename: String,
    pub original_filename: String,
    pub mime_type: String,
    pub extension: String,
}
