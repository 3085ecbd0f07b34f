use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickify::rendering::{render_file, RenderFileOptions};
use brickify::server;

#[derive(Parser)]
#[command(name = "brickify")]
#[command(about = "Turn photos into palette-snapped brick mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render an image file directly to a mosaic PNG
    Render {
        /// Input image (JPEG or PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Rendered edge length of each brick, in pixels
        #[arg(short, long, default_value_t = 20)]
        brick_size: u32,

        /// Mosaic width in blocks (height follows the aspect ratio)
        #[arg(short, long, default_value_t = 48)]
        grid_width: u32,

        /// Keep the downsampled colors instead of snapping to the palette
        #[arg(long)]
        no_palette: bool,

        /// Use fast RGB matching instead of CIEDE2000 (faster, less faithful)
        #[arg(long)]
        fast: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => run_server().await,
        Commands::Render {
            input,
            output,
            brick_size,
            grid_width,
            no_palette,
            fast,
        } => run_render_command(&input, &output, brick_size, grid_width, no_palette, fast),
    }
}

/// Render an image to a mosaic PNG file (no server needed)
fn run_render_command(
    input: &PathBuf,
    output: &PathBuf,
    brick_size: u32,
    grid_width: u32,
    no_palette: bool,
    fast: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickify=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let opts = RenderFileOptions {
        brick_size,
        grid_width,
        use_palette: !no_palette,
        high_accuracy: !fast,
    };

    let written = render_file(input, output, &opts)?;
    println!("Rendered {} ({} bytes)", output.display(), written);

    Ok(())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickify=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = server::create_app_state();
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Brickify server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
