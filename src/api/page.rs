use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;

use crate::assets::AssetLoader;

/// Serve the upload page, or a pointer to the API docs if it is missing
pub async fn handle_index() -> Response {
    match AssetLoader::index_html() {
        Some(page) => Html(page.into_owned()).into_response(),
        None => Json(json!({
            "message": "Tonewise API",
            "docs": "/swagger-ui",
        }))
        .into_response(),
    }
}
