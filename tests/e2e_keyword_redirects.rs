//! End-to-end: compile a command document, load the compiled table and
//! follow keyword queries through the HTTP service.

use std::fs;
use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bunnyhop_commands::{CommandManager, ConfigManager, Outcome};
use bunnyhop_server::{routes::app_routes, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

const DOCUMENT: &str = r#"
g:
  _leaf:
    type: querystring
    base_url: https://www.google.com/search
    q_params: q
    docstring: Google search
  news:
    _leaf:
      base_url: https://news.google.com/search
      q_params: q
  maps:
    _leaf:
      base_url: https://www.google.com/maps/search/
      q_params: [api, query]
gm:
  _leaf:
    base_url: https://mail.google.com/
gh:
  _leaf:
    type: path
    base_url: https://github.com/{{user}}/{{repo}}
    user:
      me: octocat
"$default$":
  _leaf:
    type: querystring
    base_url: https://duckduckgo.com/
    q_params: q
"#;

fn compile(dir: &TempDir) -> PathBuf {
    let input = dir.path().join("commands.yml");
    let output = dir.path().join("commands.json");
    fs::write(&input, DOCUMENT).unwrap();

    let table = ConfigManager::load_from_yaml(&input).unwrap();
    ConfigManager::save_to_json(&table, &output).unwrap();
    output
}

async fn location(app: &Router, uri: &str) -> Option<String> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    if response.status() != StatusCode::FOUND {
        return None;
    }
    response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string())
}

#[test]
fn test_compiled_table_matches_document() {
    let dir = TempDir::new().unwrap();
    let compiled = compile(&dir);

    let from_json = ConfigManager::load_from_file(&compiled).unwrap();
    let from_yaml = ConfigManager::compile_yaml_str(DOCUMENT).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json.len(), 6);
}

#[test]
fn test_manager_over_compiled_table() {
    let dir = TempDir::new().unwrap();
    let manager = CommandManager::from_file(compile(&dir)).unwrap();

    match manager.handle("g news rust").unwrap() {
        Outcome::Redirect(url) => {
            assert_eq!(url.as_str(), "https://news.google.com/search?q=rust")
        }
        Outcome::NotFound => panic!("expected a redirect"),
    }
}

#[tokio::test]
async fn test_http_redirects() {
    let dir = TempDir::new().unwrap();
    let manager = CommandManager::from_file(compile(&dir)).unwrap();
    let app = app_routes(AppState::new(manager).unwrap());

    assert_eq!(
        location(&app, "/g%20rust%20book").await.as_deref(),
        Some("https://www.google.com/search?q=rust+book")
    );
    assert_eq!(
        location(&app, "/g%20maps%20a%20b%20c").await.as_deref(),
        Some("https://www.google.com/maps/search/?api=a&query=b+c")
    );
    assert_eq!(
        location(&app, "/gm").await.as_deref(),
        Some("https://mail.google.com/")
    );
    assert_eq!(
        location(&app, "/gh%20me%20hello-world").await.as_deref(),
        Some("https://github.com/octocat/hello-world")
    );
    assert_eq!(
        location(&app, "/gh%20rust-lang").await.as_deref(),
        Some("https://github.com/rust-lang/")
    );
    assert_eq!(
        location(&app, "/rust%20lifetimes").await.as_deref(),
        Some("https://duckduckgo.com/?q=rust+lifetimes")
    );
}

#[tokio::test]
async fn test_http_command_list() {
    let dir = TempDir::new().unwrap();
    let manager = CommandManager::from_file(compile(&dir)).unwrap();
    let app = app_routes(AppState::new(manager).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/cmdlist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<code>g news</code>"));
    assert!(html.contains("Google search"));
    assert!(html.contains("(default)"));
}
