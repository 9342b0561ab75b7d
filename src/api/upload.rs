use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use axum_extra::extract::CookieJar;

use super::flash::{write_flash, FlashMessage};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::analyzer::{analyze_bytes, AnalyzeError, AnalyzeOptions};

/// Upload an image and store its dominant colors in a flash message
///
/// Every outcome redirects back to the index page (POST-redirect-GET);
/// failures the user can fix carry an error flash instead of a status
/// code, so the form is redisplayed with an annotation rather than a
/// bare error response.
#[utoipa::path(
    post,
    path = "/upload",
    request_body(
        content = Vec<u8>,
        content_type = "multipart/form-data",
        description = "Form fields: `file` (the image) and `max-results` (integer)"
    ),
    responses(
        (status = 303, description = "Redirect to the index page; outcome carried in the flash cookie"),
        (status = 400, description = "Malformed multipart body"),
    ),
    tag = "Upload"
)]
pub async fn handle_upload(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), ApiError> {
    let mut max_results_raw: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("max-results") => max_results_raw = Some(field.text().await?),
            Some("file") => {
                let bytes = field.bytes().await?;
                // An empty file input still submits a zero-length part.
                if !bytes.is_empty() {
                    file_bytes = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    let max_results = match max_results_raw.unwrap_or_default().parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(%e, "Failed to parse max-results as int");
            let jar = write_flash(jar, &FlashMessage::error("invalid setting max-results"))
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            return Ok((jar, Redirect::to("/")));
        }
    };

    let Some(bytes) = file_bytes else {
        tracing::info!("No file uploaded");
        return Ok((jar, Redirect::to("/")));
    };

    let opts = AnalyzeOptions::from_config(&state.config.quantizer, max_results);
    let results = match analyze_bytes(&bytes, opts) {
        Ok(results) => results,
        Err(AnalyzeError::Decode(e)) => {
            tracing::warn!(%e, "Cannot decode uploaded image");
            let jar = write_flash(jar, &FlashMessage::error("invalid file"))
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            return Ok((jar, Redirect::to("/")));
        }
        Err(e @ AnalyzeError::Quant(_)) => return Err(ApiError::Internal(e.to_string())),
    };

    tracing::info!(
        bytes = bytes.len(),
        colors = results.len(),
        "Upload analyzed"
    );

    let jar = write_flash(jar, &FlashMessage::results(results))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((jar, Redirect::to("/")))
}
