//! Keyword query endpoint

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use bunnyhop_commands::Outcome;

use crate::{error::ServerResult, pages, state::AppState};

/// Resolve the request path as a keyword query
///
/// Redirects with `302 Found` to the synthesized URL, or serves the
/// not-found page when nothing matches.
pub async fn resolve_query(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ServerResult<Response> {
    let query = extract_query(&uri);

    match state.manager.handle(&query)? {
        Outcome::Redirect(url) => {
            tracing::debug!(%query, destination = %url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response())
        }
        Outcome::NotFound => Ok(Html(pages::NOT_FOUND_PAGE).into_response()),
    }
}

/// Turn a request URI into the raw keyword query
///
/// The path and query string are percent-decoded together and the leading
/// slash is dropped, so `/g%20rust?lang=en` becomes `g rust?lang=en`. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn extract_query(uri: &Uri) -> String {
    let raw = match uri.query() {
        Some(query) => format!("{}?{}", uri.path(), query),
        None => uri.path().to_string(),
    };

    let decoded = String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned();

    match decoded.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}
