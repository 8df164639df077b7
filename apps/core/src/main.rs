// Glimpse CLI Entry Point
// Text prompt + image path in, one sentence out.

use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

use glimpse_core::fs_manager::PortablePathManager;
use glimpse_core::vision::{self, DeviceKind, MobileNetVariant};
use glimpse_core::{output, telemetry, AppConfig, AppError, Assistant};

/// Simple Multimodal Agent: Process text and image inputs.
#[derive(Debug, Parser)]
#[command(name = "glimpse", version)]
struct Cli {
    /// Text prompt (e.g 'What is this image?')
    #[arg(short, long)]
    text: Option<String>,

    /// Path to the image file (e.g 'dog.jpg')
    #[arg(short, long)]
    image: PathBuf,

    /// MobileNetV4 variant: small, medium or large (overrides GLIMPSE_MODEL)
    #[arg(long)]
    model: Option<MobileNetVariant>,

    /// Inference device: cpu or cuda (overrides GLIMPSE_DEVICE)
    #[arg(long)]
    device: Option<DeviceKind>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(model) = cli.model {
        config.vision.variant = model;
    }
    if let Some(device) = cli.device {
        config.vision.device = device;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", output::render_failure(&e, cli.json));
            return Ok(());
        }
    };

    telemetry::init_tracing(config.log_format)?;

    if let Err(e) = PortablePathManager::init() {
        warn!("Failed to initialize data directories: {}", e);
    }

    let assistant = Assistant::new(vision::mobilenet_classifier(config.vision));

    match assistant.respond(cli.text.as_deref(), &cli.image) {
        Ok(response) if cli.json => println!("{}", output::render_json(&response)?),
        Ok(response) => println!("{}", output::render_text(&response)),
        Err(e) => println!("{}", output::render_failure(&e, cli.json)),
    }

    Ok(())
}
