use crate::error::{CommandError, Result};
use crate::template::TemplateProcessor;
use crate::types::CommandConfig;
use url::Url;

/// Fill the `{{placeholder}}`s of the base URL from positional arguments
///
/// Argument `i` replaces keyword `i`, through the keyword's option table when
/// it has an entry for the argument. At the first missing argument the URL is
/// cut at the next remaining `{{` and the rest of the keywords are skipped.
pub fn synthesize(config: &CommandConfig, args: &[String]) -> Result<Url> {
    let mut result = config.base_url.clone();

    for (idx, keyword) in config.keywords.iter().enumerate() {
        let Some(token) = args.get(idx).filter(|token| !token.is_empty()) else {
            TemplateProcessor::truncate_at_placeholder(&mut result);
            break;
        };

        let value = config
            .options
            .get(keyword)
            .and_then(|aliases| aliases.get(token))
            .unwrap_or(token);

        result = TemplateProcessor::substitute(&result, keyword, value)?;
    }

    Url::parse(&result).map_err(|err| CommandError::invalid_url(result.as_str(), err))
}
