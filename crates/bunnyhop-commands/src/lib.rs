//! Bunnyhop keyword commands
//!
//! This crate turns a short keyword query such as `g rust borrow checker` into
//! a destination URL. A query is split into tokens, the leading token(s) pick a
//! command from an immutable [`CommandTable`], and the command's strategy builds
//! the URL from the remaining tokens:
//!
//! - **redirect**: go to the configured URL
//! - **querystring**: append the arguments as query parameters
//! - **path**: substitute the arguments into `{{placeholder}}`s
//!
//! # Examples
//!
//! ```ignore
//! use bunnyhop_commands::{CommandConfig, CommandManager, CommandTable, Outcome};
//!
//! let table = CommandTable::from_commands([
//!     CommandConfig::query_param("g", "https://www.google.com/search", ["q"])
//!         .with_docstring("Google search"),
//!     CommandConfig::path_template("gh", "https://github.com/{{user}}/{{repo}}"),
//! ])?;
//!
//! let manager = CommandManager::new(table);
//! if let Outcome::Redirect(url) = manager.handle("gh rust-lang cargo")? {
//!     assert_eq!(url.as_str(), "https://github.com/rust-lang/cargo");
//! }
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod manager;
pub mod resolver;
pub mod strategy;
pub mod table;
pub mod template;
pub mod tokenizer;
pub mod types;

pub use config::ConfigManager;
pub use error::{CommandError, Result};
pub use listing::render_command_list;
pub use manager::{CommandManager, Outcome};
pub use resolver::{resolve, ResolvedCommand};
pub use strategy::synthesize;
pub use table::{CommandTable, CommandTableBuilder};
pub use template::TemplateProcessor;
pub use tokenizer::tokenize;
pub use types::{normalize_key, CommandConfig, CommandKind, DEFAULT_COMMAND_KEY};
