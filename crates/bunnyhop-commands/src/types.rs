use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key of the command used when the first token matches nothing.
///
/// Resolution never selects it by exact match, so typing `$default$` as a
/// keyword goes through the fallback like any other unknown word.
pub const DEFAULT_COMMAND_KEY: &str = "$default$";

/// How a command turns its arguments into a destination URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum CommandKind {
    /// Go to `base_url` verbatim
    #[default]
    Redirect,

    /// Append arguments to `base_url` as query parameters
    QueryParam,

    /// Substitute arguments into `{{placeholder}}`s of `base_url`
    PathTemplate,
}

impl CommandKind {
    /// Identifier used for this kind in command documents
    pub fn identifier(&self) -> &'static str {
        match self {
            CommandKind::Redirect => "redirect",
            CommandKind::QueryParam => "querystring",
            CommandKind::PathTemplate => "path",
        }
    }

    /// Map a document identifier to a kind. Unknown identifiers redirect.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_lowercase().as_str() {
            "querystring" => CommandKind::QueryParam,
            "path" => CommandKind::PathTemplate,
            _ => CommandKind::Redirect,
        }
    }
}

/// Anything but a known identifier string (null, numbers, unknown names) redirects
impl From<serde_json::Value> for CommandKind {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(identifier) => Self::from_identifier(&identifier),
            _ => CommandKind::Redirect,
        }
    }
}

impl From<CommandKind> for String {
    fn from(kind: CommandKind) -> Self {
        kind.identifier().to_string()
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.identifier())
    }
}

/// One entry of the command table
///
/// The serialized form is the flat table format written by the compile step;
/// the key lives in the enclosing map, not in the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Normalized command key
    #[serde(skip)]
    pub key: String,

    /// URL synthesis strategy
    #[serde(rename = "type", default)]
    pub kind: CommandKind,

    /// Destination, parameter target or path template depending on `kind`
    #[serde(default)]
    pub base_url: String,

    /// Human-readable description, shown on the command list only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,

    /// Query parameter names, filled positionally from the arguments
    #[serde(rename = "q_params", default, skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<String>,

    /// Placeholder names of a path template, in first-occurrence order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Per-placeholder aliases: keyword -> raw argument -> replacement
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, BTreeMap<String, String>>,
}

impl CommandConfig {
    fn new(key: impl Into<String>, kind: CommandKind, base_url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            base_url: base_url.into(),
            docstring: None,
            query_params: Vec::new(),
            keywords: Vec::new(),
            options: BTreeMap::new(),
        }
    }

    /// Create a plain redirect command
    pub fn redirect(key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(key, CommandKind::Redirect, base_url)
    }

    /// Create a query-parameter command
    pub fn query_param<I, S>(key: impl Into<String>, base_url: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::new(key, CommandKind::QueryParam, base_url);
        config.query_params = params.into_iter().map(Into::into).collect();
        config
    }

    /// Create a path-template command. Keywords are derived when the command
    /// is registered in a table.
    pub fn path_template(key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(key, CommandKind::PathTemplate, base_url)
    }

    /// Set the docstring
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Add an alias for a placeholder value
    pub fn with_option(
        mut self,
        keyword: impl Into<String>,
        raw: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.options
            .entry(keyword.into())
            .or_default()
            .insert(raw.into(), replacement.into());
        self
    }

    /// Whether this is the reserved default command
    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_COMMAND_KEY
    }
}

/// Normalize a command key: trim, lower-case and collapse inner whitespace
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
