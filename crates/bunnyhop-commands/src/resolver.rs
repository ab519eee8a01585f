use crate::table::CommandTable;
use crate::types::{normalize_key, CommandConfig};

/// A command selected for a query, with the arguments it receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand<'a> {
    /// Selected command
    pub config: &'a CommandConfig,

    /// Arguments handed to the command's strategy
    pub args: Vec<String>,
}

/// Pick the command for a token sequence
///
/// The first token selects the command and the rest become its arguments.
/// When the first token is unknown, the default command receives every token,
/// the unrecognized first one included. The reserved default key never matches
/// exactly. `None` means nothing matched and no default is configured.
pub fn resolve<'a>(tokens: &[String], table: &'a CommandTable) -> Option<ResolvedCommand<'a>> {
    let (command, rest) = tokens.split_first()?;
    let key = normalize_key(command);

    if let Some(config) = table.get(&key).filter(|config| !config.is_default()) {
        return Some(ResolvedCommand {
            config,
            args: rest.to_vec(),
        });
    }

    table.default_command().map(|config| ResolvedCommand {
        config,
        args: tokens.to_vec(),
    })
}
