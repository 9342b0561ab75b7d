//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use huelens::api::FLASH_COOKIE;
use huelens::assets::AssetLoader;
use huelens::server::{build_router, create_app_state};

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        // Embedded assets only (no external paths), same as production
        // without env overrides.
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        let state = create_app_state(asset_loader);
        let router = build_router(state);

        Self { router }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a GET request with a Cookie header
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> TestResponse {
        self.request(
            Request::get(path)
                .header("Cookie", cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart(&self, path: &str, form: MultipartBuilder) -> TestResponse {
        let (content_type, body) = form.build();
        self.request(
            Request::post(path)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// The decoded flash message from this response's Set-Cookie
    /// header, if one was written.
    pub fn flash(&self) -> Option<serde_json::Value> {
        let raw = self
            .headers
            .get("set-cookie")?
            .to_str()
            .ok()?
            .strip_prefix(&format!("{FLASH_COOKIE}="))?
            .split(';')
            .next()?
            // The cookie layer percent-encodes the base64 padding.
            .replace("%3D", "=");
        if raw.is_empty() {
            return None;
        }
        let bytes = URL_SAFE.decode(raw).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// The raw flash cookie value, for replaying in a Cookie header.
    pub fn flash_cookie(&self) -> Option<String> {
        let raw = self
            .headers
            .get("set-cookie")?
            .to_str()
            .ok()?
            .strip_prefix(&format!("{FLASH_COOKIE}="))?
            .split(';')
            .next()?
            .to_string();
        (!raw.is_empty()).then_some(format!("{FLASH_COOKIE}={raw}"))
    }
}

/// Builder for multipart/form-data request bodies
pub struct MultipartBuilder {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self {
            boundary: "huelens-test-boundary",
            body: Vec::new(),
        }
    }

    /// Add a plain text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Finish the body, returning (content type, body bytes)
    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

impl Default for MultipartBuilder {
    fn default() -> Self {
        Self::new()
    }
}
