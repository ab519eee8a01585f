use crate::error::{CommandError, Result};
use crate::template::TemplateProcessor;
use crate::types::{normalize_key, CommandConfig, CommandKind, DEFAULT_COMMAND_KEY};
use std::collections::BTreeMap;
use url::Url;

/// Immutable keyword -> command mapping
///
/// A table is assembled once through [`CommandTableBuilder`] and only read
/// afterwards. It has no mutating methods, so one instance can be shared
/// across any number of concurrent requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    commands: BTreeMap<String, CommandConfig>,
}

impl CommandTable {
    /// Start building a table
    pub fn builder() -> CommandTableBuilder {
        CommandTableBuilder::new()
    }

    /// Build a table from a list of commands
    pub fn from_commands<I>(commands: I) -> Result<Self>
    where
        I: IntoIterator<Item = CommandConfig>,
    {
        let mut builder = CommandTableBuilder::new();
        for command in commands {
            builder.register(command)?;
        }
        Ok(builder.build())
    }

    /// Look up a command; the key is normalized first
    pub fn get(&self, key: &str) -> Option<&CommandConfig> {
        self.commands.get(&normalize_key(key))
    }

    /// Check if a command exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.commands.contains_key(&normalize_key(key))
    }

    /// The reserved default command, if configured
    pub fn default_command(&self) -> Option<&CommandConfig> {
        self.commands.get(DEFAULT_COMMAND_KEY)
    }

    /// All commands in key order
    pub fn iter(&self) -> impl Iterator<Item = &CommandConfig> {
        self.commands.values()
    }

    /// The table as a key -> command map, in key order
    pub fn as_map(&self) -> &BTreeMap<String, CommandConfig> {
        &self.commands
    }

    /// Search commands by key or docstring
    pub fn search(&self, query: &str) -> Vec<&CommandConfig> {
        let query_lower = query.to_lowercase();
        self.commands
            .values()
            .filter(|cmd| {
                cmd.key.contains(&query_lower)
                    || cmd
                        .docstring
                        .as_deref()
                        .is_some_and(|doc| doc.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    /// Get the number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Validating builder for [`CommandTable`]
#[derive(Debug, Default)]
pub struct CommandTableBuilder {
    commands: BTreeMap<String, CommandConfig>,
}

impl CommandTableBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command
    ///
    /// The key is normalized, path-template keywords are derived from the base
    /// url, and the base url must parse once its placeholders are removed.
    pub fn register(&mut self, mut command: CommandConfig) -> Result<()> {
        command.key = normalize_key(&command.key);

        if command.key.is_empty() {
            return Err(CommandError::InvalidCommandName(
                "Command key cannot be empty".to_string(),
            ));
        }

        if self.commands.contains_key(&command.key) {
            return Err(CommandError::DuplicateCommand(command.key));
        }

        if command.base_url.trim().is_empty() {
            return Err(CommandError::MissingBaseUrl(command.key));
        }

        if command.kind == CommandKind::PathTemplate {
            let derived = TemplateProcessor::extract_keywords(&command.base_url);
            if derived.iter().any(String::is_empty) {
                return Err(CommandError::InvalidKeywords {
                    key: command.key,
                    reason: "empty placeholder name".to_string(),
                });
            }
            if !command.keywords.is_empty() && command.keywords != derived {
                return Err(CommandError::InvalidKeywords {
                    key: command.key,
                    reason: format!("expected {:?}, found {:?}", derived, command.keywords),
                });
            }
            command.keywords = derived;
        }

        let stripped = TemplateProcessor::strip_placeholders(&command.base_url);
        Url::parse(&stripped).map_err(|err| CommandError::invalid_url(&command.base_url, err))?;

        self.commands.insert(command.key.clone(), command);
        Ok(())
    }

    /// Register a command, builder style
    pub fn with_command(mut self, command: CommandConfig) -> Result<Self> {
        self.register(command)?;
        Ok(self)
    }

    /// Freeze the registered commands into a table
    pub fn build(self) -> CommandTable {
        CommandTable {
            commands: self.commands,
        }
    }
}
