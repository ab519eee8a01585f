use crate::error::{CommandError, Result};
use crate::types::CommandConfig;
use url::Url;

/// Append the arguments to the base URL as query parameters
///
/// Arguments fill `query_params` positionally. Extra arguments are joined into
/// the last parameter, and a last argument that is itself a URL is replaced by
/// the value of its first query parameter. Parameters without an argument are
/// sent empty.
pub fn synthesize(config: &CommandConfig, args: &[String]) -> Result<Url> {
    let mut url =
        Url::parse(&config.base_url).map_err(|err| CommandError::invalid_url(&config.base_url, err))?;

    if config.query_params.is_empty() {
        return Ok(url);
    }

    let values = fill_values(config.query_params.len(), args);
    {
        let mut pairs = url.query_pairs_mut();
        for (idx, param) in config.query_params.iter().enumerate() {
            pairs.append_pair(param, values.get(idx).map(String::as_str).unwrap_or(""));
        }
    }

    Ok(url)
}

fn fill_values(param_count: usize, args: &[String]) -> Vec<String> {
    let mut values = args.to_vec();
    let last = param_count - 1;

    if values.len() > param_count {
        let overflow = values.split_off(last);
        values.push(overflow.join(" "));
    }

    if let Some(value) = values.get_mut(last) {
        if let Some(term) = extract_search_term(value) {
            *value = term;
        }
    }

    values
}

/// Value of the first query parameter of `candidate`, if it is a URL with one
///
/// Lets a search-result URL from another site stand in for its search term,
/// e.g. `https://www.youtube.com/results?search_query=rick` yields `rick`.
pub fn extract_search_term(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    let (_, value) = url.query_pairs().next()?;
    Some(value.into_owned())
}
