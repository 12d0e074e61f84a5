//! USB Sentinel - USB device access control with an append-only audit trail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use usb_sentinel::audit::{AuditLog, LogExporter};
use usb_sentinel::authorizer::AuthorizationEngine;
use usb_sentinel::config::ConfigLoader;
use usb_sentinel::menu;
use usb_sentinel::registry::TrustedRegistry;

#[derive(Parser)]
#[command(
    name = "usb-sentinel",
    about = "USB device access control with an append-only audit trail",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive operator session.
    Run {
        /// Path to a config file (defaults to the standard search paths).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Export destination, overriding the configured path.
        #[arg(long)]
        export_path: Option<PathBuf>,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            export_path,
        } => {
            let loader = config.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
            let config = match loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load configuration");
                    return ExitCode::FAILURE;
                }
            };

            println!("Initializing USB Device Access Logger...");
            let registry = TrustedRegistry::from_entries(config.trusted_devices);
            println!("Trusted device list loaded with {} devices.", registry.len());

            let mut engine =
                AuthorizationEngine::new(registry, AuditLog::with_capacity(config.log_capacity));
            let exporter = LogExporter::new(export_path.unwrap_or(config.export_path));

            let mut stdin = std::io::stdin().lock();
            if let Err(e) = menu::run(&mut engine, &exporter, &mut stdin) {
                tracing::error!(error = %e, "Session input failed");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
