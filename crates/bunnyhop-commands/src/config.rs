use crate::error::{CommandError, Result};
use crate::table::CommandTable;
use crate::template::TemplateProcessor;
use crate::types::{CommandConfig, CommandKind};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Key under which a node of the command document stores its own command
pub const LEAF_KEY: &str = "_leaf";

/// Raw `_leaf` entry of the hierarchical command document
#[derive(Debug, Deserialize)]
struct LeafEntry {
    #[serde(rename = "type", default)]
    kind: Option<Value>,

    #[serde(default)]
    base_url: Option<String>,

    #[serde(default)]
    docstring: Option<String>,

    #[serde(default)]
    q_params: Option<QueryParams>,

    /// Everything else; for path commands this holds the option tables
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// `q_params` may be written as a single name or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QueryParams {
    One(String),
    Many(Vec<String>),
}

impl QueryParams {
    fn into_vec(self) -> Vec<String> {
        match self {
            QueryParams::One(param) => vec![param],
            QueryParams::Many(params) => params,
        }
    }
}

/// Loading, compiling and saving command tables
pub struct ConfigManager;

impl ConfigManager {
    /// Compile a hierarchical YAML command document into a flat table
    ///
    /// Every mapping key except `_leaf` nests one more word onto the command
    /// key, so `g: { news: { _leaf: ... } }` defines the command `g news`.
    pub fn compile_yaml_str(content: &str) -> Result<CommandTable> {
        let document: Value = serde_yaml::from_str(content)?;
        Self::compile_document(&document)
    }

    /// Compile an already parsed command document
    pub fn compile_document(document: &Value) -> Result<CommandTable> {
        let mut commands = Vec::new();

        match document {
            Value::Null => {}
            Value::Mapping(root) => flatten(root, "", &mut commands)?,
            _ => {
                return Err(CommandError::ConfigError(
                    "Command document must be a mapping".to_string(),
                ))
            }
        }

        CommandTable::from_commands(commands)
    }

    /// Load and compile a hierarchical YAML command document
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<CommandTable> {
        let content = fs::read_to_string(path)
            .map_err(|e| CommandError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::compile_yaml_str(&content)
    }

    /// Parse a flat, already compiled JSON table
    pub fn load_from_json_str(content: &str) -> Result<CommandTable> {
        let entries: BTreeMap<String, CommandConfig> = serde_json::from_str(content)?;

        CommandTable::from_commands(entries.into_iter().map(|(key, mut command)| {
            command.key = key;
            command
        }))
    }

    /// Load a flat, already compiled JSON table
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<CommandTable> {
        let content = fs::read_to_string(path)
            .map_err(|e| CommandError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::load_from_json_str(&content)
    }

    /// Load a table from a file (auto-detect format)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CommandTable> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "yaml" | "yml" => Self::load_from_yaml(path),
            "json" => Self::load_from_json(path),
            _ => Err(CommandError::ConfigError(
                "Unsupported file format. Use .yaml, .yml, or .json".to_string(),
            )),
        }
    }

    /// Serialize a table to the flat JSON format
    pub fn to_json_string(table: &CommandTable) -> Result<String> {
        Ok(serde_json::to_string_pretty(table.as_map())?)
    }

    /// Save a table to a flat JSON file
    pub fn save_to_json<P: AsRef<Path>>(table: &CommandTable, path: P) -> Result<()> {
        let content = Self::to_json_string(table)?;
        fs::write(path, content)
            .map_err(|e| CommandError::ConfigError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

fn flatten(node: &Mapping, command: &str, out: &mut Vec<CommandConfig>) -> Result<()> {
    for (key, value) in node {
        let name = scalar_to_string(key).ok_or_else(|| {
            CommandError::ConfigError(format!("Non-scalar key under '{}'", command))
        })?;

        if name == LEAF_KEY {
            out.push(compile_leaf(command, value)?);
            continue;
        }

        let child = format!("{} {}", command, name).trim().to_string();
        match value {
            Value::Mapping(mapping) => flatten(mapping, &child, out)?,
            _ => {
                return Err(CommandError::ConfigError(format!(
                    "Expected a mapping for '{}'",
                    child
                )))
            }
        }
    }

    Ok(())
}

fn compile_leaf(command: &str, value: &Value) -> Result<CommandConfig> {
    let mut entry: LeafEntry = serde_yaml::from_value(value.clone())?;

    let kind = match entry.kind.take() {
        Some(Value::String(identifier)) => CommandKind::from_identifier(&identifier),
        Some(_) => CommandKind::Redirect,
        None => {
            let inferred = if entry.q_params.is_some() {
                CommandKind::QueryParam
            } else {
                CommandKind::Redirect
            };
            info!("Missing type in {}, inferring '{}'", command, inferred);
            inferred
        }
    };

    let base_url = entry
        .base_url
        .take()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| CommandError::MissingBaseUrl(command.to_string()))?;

    let mut config = match kind {
        CommandKind::Redirect => CommandConfig::redirect(command, base_url),
        CommandKind::QueryParam => CommandConfig::query_param(
            command,
            base_url,
            entry.q_params.take().map(QueryParams::into_vec).unwrap_or_default(),
        ),
        CommandKind::PathTemplate => {
            let mut config = CommandConfig::path_template(command, base_url);
            config.keywords = TemplateProcessor::extract_keywords(&config.base_url);
            config.options = collect_options(&config, &entry.extra)?;
            config
        }
    };
    config.docstring = entry.docstring;

    Ok(config)
}

fn collect_options(
    config: &CommandConfig,
    extra: &BTreeMap<String, Value>,
) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
    let mut options = BTreeMap::new();

    for keyword in &config.keywords {
        let Some(table) = extra.get(keyword) else {
            warn!(
                "No options specified for {} in {}",
                keyword, config.base_url
            );
            continue;
        };

        let Value::Mapping(aliases) = table else {
            return Err(CommandError::ConfigError(format!(
                "Options for '{}' in '{}' must be a mapping",
                keyword, config.key
            )));
        };

        let mut resolved = BTreeMap::new();
        for (raw, replacement) in aliases {
            match (scalar_to_string(raw), scalar_to_string(replacement)) {
                (Some(raw), Some(replacement)) => {
                    resolved.insert(raw, replacement);
                }
                _ => {
                    return Err(CommandError::ConfigError(format!(
                        "Options for '{}' in '{}' must map scalars to scalars",
                        keyword, config.key
                    )))
                }
            }
        }
        options.insert(keyword.clone(), resolved);
    }

    Ok(options)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
