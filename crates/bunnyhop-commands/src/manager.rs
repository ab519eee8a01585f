use crate::config::ConfigManager;
use crate::error::Result;
use crate::resolver::{resolve, ResolvedCommand};
use crate::strategy;
use crate::table::CommandTable;
use crate::tokenizer::tokenize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// What a query resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send the client to this URL
    Redirect(Url),

    /// No command matched and no default command is configured
    NotFound,
}

/// Resolves raw keyword queries against a shared, immutable command table
#[derive(Debug, Clone)]
pub struct CommandManager {
    table: Arc<CommandTable>,
}

impl CommandManager {
    /// Create a new command manager
    pub fn new(table: CommandTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Create a command manager around an already shared table
    pub fn from_shared(table: Arc<CommandTable>) -> Self {
        Self { table }
    }

    /// Create a command manager from a command file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let table = ConfigManager::load_from_file(path)?;
        Ok(Self::new(table))
    }

    /// Get the table
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Tokenize a query and pick its command
    pub fn resolve(&self, query: &str) -> Option<ResolvedCommand<'_>> {
        let tokens = tokenize(query, &self.table);
        resolve(&tokens, &self.table)
    }

    /// Resolve a query all the way to its destination
    ///
    /// Errors only when the command's URL cannot be built; unknown commands
    /// and missing arguments are not errors.
    pub fn handle(&self, query: &str) -> Result<Outcome> {
        let Some(resolved) = self.resolve(query) else {
            debug!(query, "no command matched");
            return Ok(Outcome::NotFound);
        };

        debug!(
            query,
            command = %resolved.config.key,
            kind = %resolved.config.kind,
            args = resolved.args.len(),
            "resolved command"
        );

        let url = strategy::synthesize(resolved.config, &resolved.args)?;
        Ok(Outcome::Redirect(url))
    }
}
