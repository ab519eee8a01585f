#![warn(missing_docs)]

//! Bunnyhop HTTP service
//!
//! Serves keyword redirects over HTTP: any path is treated as a keyword query
//! and answered with a redirect to the URL the command table builds for it.
//! `/` and `/cmdlist` show the list of configured commands.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::BunnyhopServer;
pub use state::AppState;
