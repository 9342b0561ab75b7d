use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use axum_extra::extract::CookieJar;

use super::flash::take_flash;
use crate::error::ApiError;
use crate::server::AppState;

/// Render the upload form, with the flash message from a preceding
/// upload if one is pending. Reading the flash consumes it.
pub async fn handle_index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let (jar, flash) = take_flash(jar);

    // Serialize both keys explicitly: the flash type omits None fields
    // in cookies, but the template expects the keys to exist.
    let data = serde_json::json!({
        "flash": flash.map(|f| serde_json::json!({
            "error": f.error,
            "results": f.results,
        })),
    });
    let html = state.templates.render("index.html", &data)?;

    Ok((jar, Html(html)))
}
