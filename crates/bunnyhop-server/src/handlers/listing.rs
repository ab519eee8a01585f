//! Command list page

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Serve the pre-rendered command list
pub async fn command_list(State(state): State<AppState>) -> Html<String> {
    Html(state.list_page.to_string())
}
