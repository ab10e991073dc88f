//! Page Routes - Form UI
//!
//! Serves the single HTML page. The URL pattern is injected server-side so
//! the browser's "Open" button matches exactly what `extract_report_url` does.

use axum::{http::StatusCode, response::Html, routing::get, Router};

use lookergpt::URL_PATTERN;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const PATTERN_SLOT: &str = "__URL_PATTERN__";

/// Render the page with the URL pattern as a JavaScript string literal
pub fn render_index() -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(URL_PATTERN)?;
    Ok(INDEX_HTML.replace(PATTERN_SLOT, &literal))
}

async fn index() -> Result<Html<String>, (StatusCode, String)> {
    render_index()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
