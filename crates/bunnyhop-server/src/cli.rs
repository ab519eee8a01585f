//! Command-line interface

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bunnyhop_commands::{CommandManager, ConfigManager, Outcome};
use clap::{Parser, Subcommand};

use crate::{config::ServerConfig, server::BunnyhopServer};

/// Keyword redirects for your address bar
#[derive(Parser, Debug)]
#[command(name = "bunnyhop", about, version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "info", env = "BUNNYHOP_LOG")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve keyword redirects over HTTP
    Serve {
        /// Server configuration file (YAML)
        #[arg(long, env = "BUNNYHOP_CONFIG")]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(long, env = "BUNNYHOP_BIND")]
        bind: Option<SocketAddr>,

        /// Command document or compiled table
        #[arg(long, env = "BUNNYHOP_COMMANDS")]
        commands: Option<PathBuf>,
    },

    /// Compile a command document into a flat JSON table
    Compile {
        /// Hierarchical command document (YAML)
        input: PathBuf,

        /// Where to write the compiled table
        output: PathBuf,
    },

    /// Print the destination of a keyword query
    Resolve {
        /// Command document or compiled table
        commands: PathBuf,

        /// Keyword query, e.g. `g rust lifetimes`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// List configured commands
    List {
        /// Command document or compiled table
        commands: PathBuf,

        /// Only show commands whose key or description contains this
        #[arg(long)]
        filter: Option<String>,
    },
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            config,
            bind,
            commands,
        } => serve(config, bind, commands).await,
        Commands::Compile { input, output } => compile(&input, &output),
        Commands::Resolve { commands, query } => {
            let destination = resolve_destination(&commands, &query.join(" "))?;
            println!("{}", destination.as_deref().unwrap_or("not found"));
            Ok(())
        }
        Commands::List { commands, filter } => {
            for line in list_lines(&commands, filter.as_deref())? {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

async fn serve(
    config_path: Option<PathBuf>,
    bind: Option<SocketAddr>,
    commands: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load_from_yaml(&path)
            .with_context(|| format!("loading server config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = bind {
        config = config.with_bind_addr(bind);
    }
    if let Some(commands) = commands {
        config = config.with_commands_path(commands);
    }

    let server = BunnyhopServer::new(config).context("preparing server")?;
    server.start().await.context("serving")?;
    Ok(())
}

fn compile(input: &Path, output: &Path) -> Result<()> {
    let table = ConfigManager::load_from_yaml(input)
        .with_context(|| format!("compiling {}", input.display()))?;
    ConfigManager::save_to_json(&table, output)
        .with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(
        commands = table.len(),
        output = %output.display(),
        "compiled command table"
    );
    Ok(())
}

/// Destination URL of `query`, or `None` when nothing matches
pub fn resolve_destination(commands: &Path, query: &str) -> Result<Option<String>> {
    let manager = CommandManager::from_file(commands)
        .with_context(|| format!("loading commands from {}", commands.display()))?;

    match manager.handle(query).context("building destination")? {
        Outcome::Redirect(url) => Ok(Some(url.to_string())),
        Outcome::NotFound => Ok(None),
    }
}

/// One line per command: key, type and docstring
pub fn list_lines(commands: &Path, filter: Option<&str>) -> Result<Vec<String>> {
    let table = ConfigManager::load_from_file(commands)
        .with_context(|| format!("loading commands from {}", commands.display()))?;

    let selected = match filter {
        Some(filter) => table.search(filter),
        None => table.iter().collect(),
    };

    Ok(selected
        .into_iter()
        .map(|cmd| {
            format!(
                "{:<16} {:<12} {}",
                cmd.key,
                cmd.kind.identifier(),
                cmd.docstring.as_deref().unwrap_or("")
            )
            .trim_end()
            .to_string()
        })
        .collect())
}
