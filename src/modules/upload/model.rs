use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashSet;
use uuid::Uuid;

use crate::configs::ConfigError;
use crate::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_ALLOWED_MIME_TYPES, RANDOM_NAME_LENGTH_RANGE,
};

/// How the unique part of a stored filename is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStrategy {
    /// Time-ordered UUIDv7, hyphenated
    #[default]
    UuidV7,
    /// Lowercase alphanumeric token of `len` characters, `len` within
    /// `RANDOM_NAME_LENGTH_RANGE`
    Random { len: usize },
}

impl NameStrategy {
    pub fn random(len: usize) -> Result<Self, ConfigError> {
        if !RANDOM_NAME_LENGTH_RANGE.contains(&len) {
            return Err(ConfigError::InvalidTokenLength(len));
        }
        Ok(NameStrategy::Random { len })
    }

    /// Pulls an out-of-range token length back into `RANDOM_NAME_LENGTH_RANGE`.
    fn bounded(self) -> Self {
        match self {
            NameStrategy::Random { len } => NameStrategy::Random {
                len: len.clamp(*RANDOM_NAME_LENGTH_RANGE.start(), *RANDOM_NAME_LENGTH_RANGE.end()),
            },
            other => other,
        }
    }

    pub fn generate(&self) -> String {
        match self.bounded() {
            NameStrategy::UuidV7 => Uuid::now_v7().to_string(),
            NameStrategy::Random { len } => rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(|b| char::from(b).to_ascii_lowercase())
                .collect(),
        }
    }
}

/// Upload validation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    pub allowed_mime_types: HashSet<String>,
    pub allowed_extensions: HashSet<String>,
    pub naming: NameStrategy,
    pub verify_extension_matches_mime: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            naming: NameStrategy::default(),
            verify_extension_matches_mime: true,
        }
    }
}

impl UploadConfig {
    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_mime_types =
            mime_types.into_iter().map(|m| crate::utils::normalize_mime(m.as_ref())).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn with_naming(mut self, naming: NameStrategy) -> Self {
        self.naming = naming.bounded();
        self
    }

    pub fn verify_extension_matches_mime(mut self, verify: bool) -> Self {
        self.verify_extension_matches_mime = verify;
        self
    }

    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(mime_type)
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }

    /// Whether some MIME type `mime_guess` associates with `extension` is on
    /// the allow-list.
    pub fn extension_has_allowed_mime(&self, extension: &str) -> bool {
        mime_guess::from_ext(extension).iter().any(|m| self.allows_mime_type(m.essence_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_common_images() {
        let config = UploadConfig::default();
        assert!(config.allows_mime_type("image/png"));
        assert!(config.allows_mime_type("image/jpeg"));
        assert!(!config.allows_mime_type("application/x-evil"));
        assert!(config.allows_extension("jpg"));
        assert!(!config.allows_extension("exe"));
        assert_eq!(config.naming, NameStrategy::UuidV7);
        assert!(config.verify_extension_matches_mime);
    }

    #[test]
    fn test_builders_normalize_entries() {
        let config = UploadConfig::default()
            .with_mime_types(["Application/PDF", " text/plain; charset=utf-8"])
            .with_extensions([".PDF", "txt "]);

        assert!(config.allows_mime_type("application/pdf"));
        assert!(config.allows_mime_type("text/plain"));
        assert!(!config.allows_mime_type("image/png"));
        assert!(config.allows_extension("pdf"));
        assert!(config.allows_extension("txt"));
        assert!(!config.allows_extension("jpg"));
    }

    #[test]
    fn test_uuid_names_parse_back() {
        let name = NameStrategy::UuidV7.generate();
        let parsed = Uuid::parse_str(&name).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_random_names_have_requested_length() {
        let name = NameStrategy::Random { len: 12 }.generate();
        assert_eq!(name.len(), 12);
        assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_random_constructor_checks_length() {
        assert_eq!(NameStrategy::random(16), Ok(NameStrategy::Random { len: 16 }));
        assert_eq!(NameStrategy::random(0), Err(ConfigError::InvalidTokenLength(0)));
        assert_eq!(NameStrategy::random(65), Err(ConfigError::InvalidTokenLength(65)));
    }

    #[test]
    fn test_out_of_range_lengths_are_clamped() {
        let config = UploadConfig::default().with_naming(NameStrategy::Random { len: 0 });
        assert_eq!(config.naming, NameStrategy::Random { len: 8 });

        let config = UploadConfig::default().with_naming(NameStrategy::Random { len: 500 });
        assert_eq!(config.naming, NameStrategy::Random { len: 64 });

        // set directly, bypassing the builder
        assert_eq!(NameStrategy::Random { len: 0 }.generate().len(), 8);
    }

    #[test]
    fn test_extension_has_allowed_mime() {
        let config = UploadConfig::default();
        assert!(config.extension_has_allowed_mime("jpg"));
        assert!(!config.extension_has_allowed_mime("pdf"));
        assert!(!config.extension_has_allowed_mime("cst"));
    }

    #[test]
    fn test_generated_names_differ() {
        for strategy in [NameStrategy::UuidV7, NameStrategy::Random { len: 32 }] {
            assert_ne!(strategy.generate(), strategy.generate());
        }
    }
}
