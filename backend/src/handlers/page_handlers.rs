use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use frontend::render::{is_not_found, render_page, RenderError};
use thiserror::Error;
use tracing::{error, info};

use crate::AppState;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Failed to render page: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
    }
}

/// The built document is a template, never a page of its own.
const TEMPLATE_PATH: &str = "/index.html";

/// Server-renders whatever route `uri` points at. Unknown paths still get a
/// full page, just the not-found one with a 404 status.
pub async fn render_route(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), PageError> {
    let path = match uri.path() {
        TEMPLATE_PATH => "/".to_string(),
        path => path.to_string(),
    };
    let status = if is_not_found(&path) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let page = render_page(path.clone()).await?;
    info!("Rendered {} ({} bytes of styles)", path, page.styles.len());

    Ok((status, Html(state.template.assemble(&page, &state.color_mode))))
}

pub async fn health_check() -> &'static str {
    "OK"
}
