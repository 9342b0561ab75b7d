//! One-shot flash messages carried in a cookie.
//!
//! The upload handler stores its outcome (an error string or the
//! analysis results) in a base64-encoded JSON cookie and redirects to
//! the index page. Reading the message consumes it: the returned jar
//! carries a removal cookie so the message shows exactly once.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::ColorResult;

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "flash-session";

/// Outcome of an upload, shown once on the next index render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// User-facing error, if the upload failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Dominant colors, if the upload succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ColorResult>>,
}

impl FlashMessage {
    /// A flash carrying an error string.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            results: None,
        }
    }

    /// A flash carrying analysis results.
    pub fn results(results: Vec<ColorResult>) -> Self {
        Self {
            error: None,
            results: Some(results),
        }
    }
}

/// Add the flash cookie to the jar.
pub fn write_flash(jar: CookieJar, message: &FlashMessage) -> Result<CookieJar, serde_json::Error> {
    let encoded = URL_SAFE.encode(serde_json::to_vec(message)?);
    let cookie = Cookie::build((FLASH_COOKIE, encoded))
        .path("/")
        .http_only(true)
        .build();
    Ok(jar.add(cookie))
}

/// Read and consume the flash cookie.
///
/// Returns the updated jar (with the cookie expired, if one was
/// present) and the message. An absent or undecodable cookie yields
/// `None`; a broken cookie is still removed so it cannot wedge the
/// index page.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let message = URL_SAFE
        .decode(cookie.value())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok());

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, message)
}
