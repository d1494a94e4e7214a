use dotenvy::dotenv;
use axum::{routing::{get, MethodRouter}, Router};
use frontend::color_mode::ColorModeConfig;
use frontend::render::HtmlTemplate;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

mod config {
    pub mod server;
}
mod handlers {
    pub mod page_handlers;
}

use config::server::ServerConfig;
use handlers::page_handlers;

pub struct AppState {
    template: HtmlTemplate,
    color_mode: ColorModeConfig,
}

/// Trunk's `index.html` carries the wasm bootstrap; without it the page is
/// served unhydrated with every entrance shown in its final pose.
fn load_template(dist_dir: &Path) -> HtmlTemplate {
    let path = dist_dir.join("index.html");
    match std::fs::read_to_string(&path) {
        Ok(source) => match HtmlTemplate::parse(&source) {
            Ok(template) => {
                info!("Using page template {}", path.display());
                template
            }
            Err(e) => {
                warn!("Ignoring malformed template {}: {}", path.display(), e);
                HtmlTemplate::fallback()
            }
        },
        Err(e) => {
            warn!("No template at {} ({}), serving without hydration", path.display(), e);
            HtmlTemplate::fallback()
        }
    }
}

fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    // Built files win; any other path is rendered by the router.
    let render: MethodRouter = get(page_handlers::render_route).with_state(state.clone());
    let dist = ServeDir::new(&config.dist_dir).fallback(render);

    Router::new()
        .route("/", get(page_handlers::render_route))
        .route("/index.html", get(page_handlers::render_route))
        .route("/api/health", get(page_handlers::health_check))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback_service(dist)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    info!("Starting in {} mode", config.environment);

    let state = Arc::new(AppState {
        template: load_template(&config.dist_dir),
        color_mode: ColorModeConfig::default(),
    });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    if config.is_development() {
        info!("Serving bundle from {} and assets from {}", config.dist_dir.display(), config.assets_dir.display());
    }
    axum::serve(listener, app(state, &config).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = ServerConfig::from_lookup(|key| {
            (key == "DIST_DIR").then(|| "./does-not-exist".to_string())
        })
        .unwrap();
        let state = Arc::new(AppState {
            template: HtmlTemplate::fallback(),
            color_mode: ColorModeConfig::default(),
        });
        app(state, &config)
    }

    async fn get_page(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, _, body) = get_page("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn root_serves_styled_document() {
        let (status, content_type, body) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap_or_default().starts_with("text/html"));

        let head_end = body.find("</head>").unwrap();
        assert!(body[..head_end].contains("@keyframes bgAnimation"));
        assert!(body[..head_end].contains("<style data-growth-global>"));

        let script = body.find("growth-color-mode").unwrap();
        let app_root = body.find("<div id=\"app\">").unwrap();
        assert!(head_end < script && script < app_root);
        assert!(body.contains("Grow Your Business Online"));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let (status, _, body) = get_page("/careers").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        assert!(body.contains("<div id=\"app\">"));
    }

    #[tokio::test]
    async fn unhydrated_page_shows_every_section() {
        let (_, _, body) = get_page("/").await;
        let head_end = body.find("</head>").unwrap();
        assert!(body[..head_end].contains("<style data-growth-reveal>[data-motion] { opacity: 1 !important;"));
        assert!(!body.contains("<noscript>"));
        for text in ["We are a passionate team", ">Teams</h1>", "Contact Us"] {
            assert!(body.contains(text), "{text} missing");
        }
    }

    #[tokio::test]
    async fn built_template_path_is_rendered_not_served_raw() {
        let dist = std::env::temp_dir().join(format!("growth-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html><head></head><body><script>boot()</script></body></html>").unwrap();

        let config = ServerConfig::from_lookup(|key| {
            (key == "DIST_DIR").then(|| dist.display().to_string())
        })
        .unwrap();
        let state = Arc::new(AppState {
            template: load_template(&dist),
            color_mode: ColorModeConfig::default(),
        });
        let response = app(state, &config)
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        std::fs::remove_dir_all(&dist).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<div id=\"app\">"));
        assert!(body.contains("Grow Your Business Online"));
        assert!(body.contains("<noscript><style data-growth-reveal>"));
    }

    #[test]
    fn missing_template_falls_back() {
        let template = load_template(Path::new("./does-not-exist"));
        assert_eq!(template, HtmlTemplate::fallback());
    }
}
