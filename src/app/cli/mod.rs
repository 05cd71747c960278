//! CLI Adapter.

mod create;
mod sku;

use std::path::PathBuf;

use crate::adapters::OutputFormat;
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cartctl")]
#[command(version)]
#[command(
    about = "Build and submit partner commerce carts from catalog SKU requirements",
    long_about = None
)]
struct Cli {
    /// Path to a cartctl.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print objects as compact JSON lines
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a cart for a customer, prompting for anything not given
    #[clap(visible_alias = "c")]
    Create(create::CreateArgs),
    /// Show the descriptor of a catalog SKU
    #[clap(visible_alias = "s")]
    Sku(sku::SkuArgs),
}

/// Global settings shared by every subcommand.
pub(crate) struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init_tracing(cli.verbose);

    let globals = GlobalArgs {
        config: cli.config,
        format: if cli.json { OutputFormat::Json } else { OutputFormat::Pretty },
    };

    let result: Result<(), AppError> = match cli.command {
        Commands::Create(args) => create::run_create(&globals, args),
        Commands::Sku(args) => sku::run_sku(&globals, args),
    };

    match result {
        Ok(()) => {}
        Err(AppError::Interrupted) => {
            eprintln!("Cancelled");
        }
        Err(e) => {
            match e.status() {
                Some(status) => eprintln!("Error: {} (HTTP {})", e, status),
                None => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
    }
}
