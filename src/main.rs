use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huelens::api;
use huelens::assets::AssetLoader;
use huelens::models::AppConfig;
use huelens::server;
use huelens::services::analyzer::{analyze_bytes, AnalyzeOptions};

#[derive(Parser)]
#[command(name = "huelens")]
#[command(about = "Huelens - dominant color extraction service for uploaded images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze a local image file and print the dominant colors as JSON
    Analyze {
        /// Path to the image file (PNG, JPEG, GIF, WebP)
        #[arg(short, long)]
        file: PathBuf,

        /// Number of colors to report
        #[arg(short, long, default_value_t = 5)]
        max_results: i64,

        /// Quantization coarseness: low bits discarded per 16-bit channel
        #[arg(short, long)]
        shift: Option<u32>,

        /// Drop colors covering less than this percentage of the image
        #[arg(long)]
        min_ratio: Option<f64>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huelens API",
        description = "Dominant color extraction for uploaded images",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_upload, api::handle_colors),
    components(schemas(huelens::models::ColorResult, huelens::models::Rgb)),
    tags(
        (name = "Upload", description = "Browser upload flow with flash messaging"),
        (name = "Colors", description = "JSON color extraction")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            file,
            max_results,
            shift,
            min_ratio,
        }) => run_analyze_command(&file, max_results, shift, min_ratio),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Analyze an image file directly (no server needed)
fn run_analyze_command(
    file: &PathBuf,
    max_results: i64,
    shift: Option<u32>,
    min_ratio: Option<f64>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huelens=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let asset_loader = AssetLoader::from_env();
    let mut config = AppConfig::load_from_assets(&asset_loader);
    if let Some(shift) = shift {
        config.quantizer.shift = shift;
    }
    // The CLI is not bound by the server-side result cap.
    config.quantizer.max_results = max_results.max(1) as usize;

    let mut opts = AnalyzeOptions::from_config(&config.quantizer, max_results);
    if let Some(min_ratio) = min_ratio {
        opts = opts.min_ratio(min_ratio);
    }

    let bytes = std::fs::read(file)?;
    let results = analyze_bytes(&bytes, opts)
        .map_err(|e| anyhow::anyhow!("Analysis failed for {}: {e}", file.display()))?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    println!("Huelens v{VERSION}");
    println!("Dominant color extraction service for uploaded images\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:8080 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nEmbedded templates:");
    for name in AssetLoader::list_templates() {
        println!("  {name}");
    }

    println!("\nCommands:");
    println!("  huelens serve     Start the HTTP server");
    println!("  huelens analyze   Analyze a local image file");
    println!("\nRun 'huelens --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huelens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!(
        templates = ?templates_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let asset_loader = Arc::new(AssetLoader::new(templates_dir, config_file));
    let state = server::create_app_state(asset_loader);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huelens server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
