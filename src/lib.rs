//! Screening for files arriving through an actix-web upload pipeline.
//!
//! [`UploadValidator`] checks the declared MIME type against an allow-list and
//! derives a safe storage filename from the client-supplied one. Both checks
//! are stateless; the allow-lists live in an explicit [`UploadConfig`].

pub mod api;
pub mod configs;
pub mod constants;
pub mod modules;
pub mod utils;

pub use api::error::UploadError;
pub use configs::{upload_config, ConfigError};
pub use constants::Env;
pub use modules::upload::{
    describe_field, next_file, AcceptedUpload, Decision, IncomingFile, NameStrategy,
    UploadConfig, UploadValidator,
};
