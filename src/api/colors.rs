use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::ColorResult;
use crate::server::AppState;
use crate::services::analyzer::{analyze_bytes, AnalyzeOptions};

/// Extract dominant colors from an uploaded image
///
/// JSON variant of the upload endpoint: responds with the ranked color
/// list directly instead of redirecting to the index page.
#[utoipa::path(
    post,
    path = "/api/colors",
    request_body(
        content = Vec<u8>,
        content_type = "multipart/form-data",
        description = "Form fields: `file` (required image), `max-results` \
                       (optional integer), `min-ratio` (optional percentage)"
    ),
    responses(
        (status = 200, description = "Ranked dominant colors", body = [ColorResult]),
        (status = 400, description = "Missing file, invalid field, or undecodable image"),
    ),
    tag = "Colors"
)]
pub async fn handle_colors(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<ColorResult>>, ApiError> {
    let mut max_results_raw: Option<String> = None;
    let mut min_ratio_raw: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("max-results") => max_results_raw = Some(field.text().await?),
            Some("min-ratio") => min_ratio_raw = Some(field.text().await?),
            Some("file") => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    file_bytes = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    let bytes = file_bytes.ok_or(ApiError::MissingField("file"))?;

    let max_results = match max_results_raw {
        Some(raw) => raw.parse::<i64>().map_err(|_| ApiError::InvalidField {
            field: "max-results",
            value: raw,
        })?,
        None => state.config.quantizer.max_results as i64,
    };

    let mut opts = AnalyzeOptions::from_config(&state.config.quantizer, max_results);
    if let Some(raw) = min_ratio_raw {
        let min_ratio = raw.parse::<f64>().map_err(|_| ApiError::InvalidField {
            field: "min-ratio",
            value: raw,
        })?;
        opts = opts.min_ratio(min_ratio);
    }

    let results = analyze_bytes(&bytes, opts)?;

    tracing::info!(
        bytes = bytes.len(),
        colors = results.len(),
        "Colors request analyzed"
    );

    Ok(Json(results))
}
