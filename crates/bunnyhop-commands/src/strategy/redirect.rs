use crate::error::{CommandError, Result};
use crate::types::CommandConfig;
use url::Url;

/// Go to the configured URL; arguments are ignored
pub fn synthesize(config: &CommandConfig) -> Result<Url> {
    Url::parse(&config.base_url).map_err(|err| CommandError::invalid_url(&config.base_url, err))
}
