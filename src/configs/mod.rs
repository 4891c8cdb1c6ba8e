use crate::{
    constants::{Env, DEFAULT_RANDOM_NAME_LENGTH, RANDOM_NAME_LENGTH_RANGE},
    modules::upload::{NameStrategy, UploadConfig},
    utils::parse_list,
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} must list at least one entry")]
    EmptyList(&'static str),
    #[error(
        "Random name length {0} is outside {min}..={max}",
        min = RANDOM_NAME_LENGTH_RANGE.start(),
        max = RANDOM_NAME_LENGTH_RANGE.end()
    )]
    InvalidTokenLength(usize),
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue { key, value: value.into() }
    }
}

/// Builds the upload configuration, keeping defaults for unset variables.
pub fn upload_config(env: &Env) -> Result<UploadConfig, ConfigError> {
    let mut config = UploadConfig::default();

    if let Some(raw) = &env.allowed_mime_types {
        let mime_types = parse_list(raw);
        if mime_types.is_empty() {
            return Err(ConfigError::EmptyList("UPLOAD_ALLOWED_MIME_TYPES"));
        }
        if let Some(bad) = mime_types.iter().find(|m| !is_mime_shaped(m)) {
            return Err(ConfigError::invalid("UPLOAD_ALLOWED_MIME_TYPES", bad.clone()));
        }
        config = config.with_mime_types(mime_types);
    }

    if let Some(raw) = &env.allowed_extensions {
        let extensions = parse_list(raw);
        if extensions.is_empty() {
            return Err(ConfigError::EmptyList("UPLOAD_ALLOWED_EXTENSIONS"));
        }
        if let Some(bad) = extensions.iter().find(|e| !crate::utils::is_alphanumeric(e)) {
            return Err(ConfigError::invalid("UPLOAD_ALLOWED_EXTENSIONS", bad.clone()));
        }
        config = config.with_extensions(extensions);
    }

    config = config.with_naming(name_strategy(env)?);

    if let Some(raw) = &env.verify_extension {
        let verify = match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => return Err(ConfigError::invalid("UPLOAD_VERIFY_EXTENSION", raw.clone())),
        };
        config = config.verify_extension_matches_mime(verify);
    }

    // With the cross-check on, an extension whose MIME types are all outside
    // the allow-list can never be accepted.
    if config.verify_extension_matches_mime {
        let mut extensions: Vec<&String> = config.allowed_extensions.iter().collect();
        extensions.sort();
        if let Some(bad) = extensions.into_iter().find(|e| !config.extension_has_allowed_mime(e)) {
            return Err(ConfigError::invalid("UPLOAD_ALLOWED_EXTENSIONS", bad.clone()));
        }
    }

    log::info!(
        "Upload config loaded: {} mime type(s), {} extension(s), naming {:?}",
        config.allowed_mime_types.len(),
        config.allowed_extensions.len(),
        config.naming
    );
    Ok(config)
}

fn name_strategy(env: &Env) -> Result<NameStrategy, ConfigError> {
    let strategy = env.name_strategy.as_deref().map(str::trim).unwrap_or("uuid");

    match strategy.to_ascii_lowercase().as_str() {
        "uuid" => Ok(NameStrategy::UuidV7),
        "random" => {
            let len = match &env.random_name_length {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::invalid("UPLOAD_RANDOM_NAME_LENGTH", raw.clone()))?,
                None => DEFAULT_RANDOM_NAME_LENGTH,
            };
            NameStrategy::random(len)
        }
        _ => Err(ConfigError::invalid("UPLOAD_NAME_STRATEGY", strategy.to_string())),
    }
}

fn is_mime_shaped(value: &str) -> bool {
    match value.split_once('/') {
        Some((kind, sub)) => {
            !kind.is_empty() && !sub.is_empty() && !sub.contains('/') && !value.contains(' ')
        }
        None => false,
    }
}
