pub mod color;
pub mod config;

pub use color::{ColorResult, Rgb};
pub use config::AppConfig;
