//! URL synthesis strategies
//!
//! Each [`CommandKind`] has exactly one synthesis function; [`synthesize`]
//! dispatches to it.

pub mod path;
pub mod query;
pub mod redirect;

use crate::error::Result;
use crate::types::{CommandConfig, CommandKind};
use url::Url;

/// Build the destination URL for a command and its arguments
pub fn synthesize(config: &CommandConfig, args: &[String]) -> Result<Url> {
    match config.kind {
        CommandKind::Redirect => redirect::synthesize(config),
        CommandKind::QueryParam => query::synthesize(config, args),
        CommandKind::PathTemplate => path::synthesize(config, args),
    }
}
