//! Application state for the HTTP service

use std::sync::Arc;
use std::time::Instant;

use bunnyhop_commands::{render_command_list, CommandManager};

use crate::error::ServerResult;

/// Application state shared across all handlers
///
/// Everything in here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// Query resolver over the command table
    pub manager: CommandManager,
    /// Command list page, rendered once at startup
    pub list_page: Arc<str>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state, rendering the command list page
    pub fn new(manager: CommandManager) -> ServerResult<Self> {
        let list_page = render_command_list(manager.table())?;

        Ok(Self {
            manager,
            list_page: Arc::from(list_page),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
