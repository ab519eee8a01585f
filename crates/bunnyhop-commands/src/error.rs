use thiserror::Error;

/// Errors that can occur while building a command table or synthesizing a URL
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command name: {0}")]
    InvalidCommandName(String),

    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    #[error("Missing base url in {0}")]
    MissingBaseUrl(String),

    #[error("Invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Keywords of {key} do not match its base url placeholders: {reason}")]
    InvalidKeywords { key: String, reason: String },

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

impl CommandError {
    pub(crate) fn invalid_url(url: impl Into<String>, err: url::ParseError) -> Self {
        CommandError::InvalidUrl {
            url: url.into(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
