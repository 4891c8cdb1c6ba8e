pub const DEFAULT_ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
pub const DEFAULT_RANDOM_NAME_LENGTH: usize = 32;
pub const RANDOM_NAME_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 8..=64;
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Raw upload settings as read from the environment. Parsing and validation
/// happen in [`crate::configs::upload_config`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    pub allowed_mime_types: Option<String>,
    pub allowed_extensions: Option<String>,
    pub name_strategy: Option<String>,
    pub random_name_length: Option<String>,
    pub verify_extension: Option<String>,
}

impl Env {
    /// Loads `.env`, starts the logger and reads the process environment.
    pub fn load() -> Self {
        let dotenv = dotenvy::dotenv();
        let _ = env_logger::try_init();
        match dotenv {
            Ok(path) => log::info!("Environment variables loaded from {}", path.display()),
            Err(e) => log::info!("No .env file loaded ({}), using process environment", e),
        }
        Self::new()
    }

    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Env {
            allowed_mime_types: lookup("UPLOAD_ALLOWED_MIME_TYPES"),
            allowed_extensions: lookup("UPLOAD_ALLOWED_EXTENSIONS"),
            name_strategy: lookup("UPLOAD_NAME_STRATEGY"),
            random_name_length: lookup("UPLOAD_RANDOM_NAME_LENGTH"),
            verify_extension: lookup("UPLOAD_VERIFY_EXTENSION"),
        }
    }
}
