use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bunnyhop_commands::{CommandConfig, CommandManager, CommandTable};
use bunnyhop_server::{models::HealthResponse, routes::app_routes, AppState};
use tower::ServiceExt;

fn table(with_default: bool) -> CommandTable {
    let mut builder = CommandTable::builder()
        .with_command(
            CommandConfig::query_param("g", "https://www.google.com/search", ["q"])
                .with_docstring("Google search"),
        )
        .unwrap()
        .with_command(CommandConfig::redirect("gm", "https://mail.google.com/"))
        .unwrap()
        .with_command(CommandConfig::path_template("port", "https://x.com:{{port}}/"))
        .unwrap();

    if with_default {
        builder = builder
            .with_command(CommandConfig::query_param(
                "$default$",
                "https://duckduckgo.com/",
                ["q"],
            ))
            .unwrap();
    }
    builder.build()
}

fn app(with_default: bool) -> Router {
    let state = AppState::new(CommandManager::new(table(with_default))).unwrap();
    app_routes(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_redirects_query_command() {
    let (status, location, _) = get(app(false), "/g%20rust%20book").await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        location.as_deref(),
        Some("https://www.google.com/search?q=rust+book")
    );
}

#[tokio::test]
async fn test_redirects_plain_command() {
    let (status, location, _) = get(app(false), "/GM").await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("https://mail.google.com/"));
}

#[tokio::test]
async fn test_unknown_keyword_without_default() {
    let (status, location, body) = get(app(false), "/nothing%20here").await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
    assert!(body.contains("Nothing interesting here."));
}

#[tokio::test]
async fn test_unknown_keyword_uses_default() {
    let (status, location, _) = get(app(true), "/nothing%20here").await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(
        location.as_deref(),
        Some("https://duckduckgo.com/?q=nothing+here")
    );
}

#[tokio::test]
async fn test_command_list_pages() {
    for uri in ["/", "/cmdlist"] {
        let (status, _, body) = get(app(false), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<code>g</code>"));
        assert!(body.contains("Google search"));
        assert!(body.contains("3 commands"));
    }
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(app(true), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.commands, 4);
}

#[tokio::test]
async fn test_unbuildable_destination_is_server_error() {
    let (status, location, body) = get(app(false), "/port%20notaport").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(location.is_none());
    assert!(body.contains("Something went wrong"));
}
