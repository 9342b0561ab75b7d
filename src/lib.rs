//! Huelens - dominant color extraction service
//!
//! Web service that accepts an uploaded raster image and reports its
//! dominant colors. This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
