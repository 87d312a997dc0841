//! HTTP status service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devsecops_status::api::{create_router, AppState};
use devsecops_status::config::Config;
use devsecops_status::metrics;
use devsecops_status::utils::shutdown_signal;

/// HTTP status service for the DevSecOps pipeline demo.
#[derive(Parser, Debug)]
#[command(name = "devsecops-status")]
#[command(about = "Status page and health-check service for the DevSecOps pipeline demo")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides APP_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides APP_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("devsecops_status=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DEVSECOPS STATUS SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Environment: {}", config.app_env);
    println!("  Port: {}", config.app_port);
    println!("  Version: {}", config.app_version);
    println!(
        "  Secret Key: {}",
        if config.has_default_secret() {
            "DEFAULT (rotate before production!)"
        } else {
            "present"
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.app_port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    if config.is_production() && config.has_default_secret() {
        warn!("SECRET_KEY still holds the development default in a production environment");
    }

    info!("Configuration loaded successfully");
    info!("Environment: {}", config.app_env);
    info!("Version: {}", config.app_version);

    // Initialize metrics
    let metrics_handle = metrics::init_metrics()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;

    // Create app state and router
    let port = config.app_port;
    let app_state = AppState::new(config, metrics_handle);
    let router = create_router(app_state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
