use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use skin_tone::{AnalysisResult, Analyzer, ColorEntry, Formality, Style};
use tonewise::api;
use tonewise::assets::AssetLoader;
use tonewise::models::AppConfig;
use tonewise::server;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Parser)]
#[command(name = "tonewise")]
#[command(about = "Skin undertone analysis with palette and outfit suggestions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze a photo directly (no server needed)
    Analyze {
        /// JPEG or PNG file to analyze
        image: PathBuf,

        /// Palette style: "subtle" or "bold"
        #[arg(short, long, default_value_t = Style::default().to_string())]
        style: String,

        /// Outfit formality: "casual" or "professional"
        #[arg(short, long, default_value_t = Formality::default().to_string())]
        formality: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tonewise API",
        description = "Skin undertone analysis with palette and outfit suggestions",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_analyze, api::handle_health),
    components(schemas(
        api::AnalyzeForm,
        api::AnalyzeResponse,
        api::AnalyzeErrorResponse,
        api::ColorResponse,
        api::HealthResponse,
    )),
    tags(
        (name = "Analysis", description = "Undertone detection and recommendations"),
        (name = "Service", description = "Service status")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            image,
            style,
            formality,
            json,
        }) => run_analyze_command(&image, &style, &formality, json),
        Some(Commands::Init { force }) => run_init_command(force),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Analyze a single image file and print the result
fn run_analyze_command(
    image: &Path,
    style: &str,
    formality: &str,
    json: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonewise=warn,skin_tone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let analyzer = config
        .analyzer()
        .map_err(|e| anyhow::anyhow!("Invalid analysis configuration: {e}"))?;

    let result = analyze_file(&analyzer, image, style, formality)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

/// Read and analyze one file; analysis failures carry the user guidance
fn analyze_file(
    analyzer: &Analyzer,
    image: &Path,
    style: &str,
    formality: &str,
) -> anyhow::Result<AnalysisResult> {
    let bytes = std::fs::read(image)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", image.display()))?;

    analyzer
        .analyze(&bytes, style, formality)
        .map_err(|e| anyhow::anyhow!("{}: {e}\n{}", e.kind(), e.kind().guidance()))
}

fn print_result(result: &AnalysisResult) {
    println!("Undertone: {}", result.undertone);
    println!(
        "Skin pixels: {} of {} ({:.1}%)",
        result.skin.pixel_count,
        result.skin.total_pixels,
        result.skin.coverage() * 100.0
    );
    println!(
        "Mean skin color: rgb({:.0}, {:.0}, {:.0})",
        result.skin.mean.r, result.skin.mean.g, result.skin.mean.b
    );

    println!("\nColors:");
    for color in &result.colors {
        println!("  {}", color_line(color));
    }

    println!("\nOutfits:");
    for (i, outfit) in result.outfits.iter().enumerate() {
        println!("  {}. {outfit}", i + 1);
    }
}

/// One palette row: hex, decimal RGB and name
fn color_line(color: &ColorEntry) -> String {
    match color.rgb() {
        Some([r, g, b]) => format!("{:<8} rgb({r:>3}, {g:>3}, {b:>3})  {}", color.hex, color.name),
        None => format!("{:<8} {}", color.hex, color.name),
    }
}

/// Extract the embedded config to the filesystem
fn run_init_command(force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    for f in &report.written {
        println!("Wrote {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Tonewise v{VERSION}");
    println!("Skin undertone analysis with palette and outfit suggestions\n");

    println!("Environment Variables:");
    let default_bind = format!("{DEFAULT_BIND_ADDR} (default)");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or(&default_bind)
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    let source = loader.config_source();
    println!("\nConfig:  {source}");
    if config_file.is_some() && source == tonewise::assets::ConfigSource::Embedded {
        println!("         (CONFIG_FILE not found, run 'tonewise init' to create it)");
    }

    println!("\nCommands:");
    println!("  tonewise serve            Start the HTTP server");
    println!("  tonewise analyze <IMAGE>  Analyze a photo from the command line");
    println!("  tonewise init             Write config.yaml for customization");
    println!("\nRun 'tonewise --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonewise=debug,skin_tone=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = AssetLoader::from_env();
    tracing::info!(config = %loader.config_source(), "Asset sources configured");

    let config = AppConfig::load_from_assets(&loader);
    let state = server::create_app_state(config)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Tonewise server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
