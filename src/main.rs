//! Console dashboard entry point.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devops_dashboard::api::types::NewUser;
use devops_dashboard::api::{ApiClient, Backend};
use devops_dashboard::config::Config;
use devops_dashboard::error::DashboardError;
use devops_dashboard::view::render::{render_dashboard, render_users, USER_ADDED_ACK};
use devops_dashboard::view::{Draft, ViewController};

/// Console dashboard for the Full Stack DevOps user API.
#[derive(Parser, Debug)]
#[command(name = "devops-dashboard")]
#[command(about = "Shows backend health and the user roster, and adds users")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the API base URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the dashboard and add users interactively (default).
    Run,

    /// Check configuration validity.
    CheckConfig,

    /// Check backend health and connection.
    CheckHealth,

    /// Add a single user and exit.
    AddUser {
        /// Display name.
        name: String,
        /// Email address.
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("devops_dashboard=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = load_config(args.api_url)?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::CheckHealth) => cmd_check_health(&config).await,
        Some(Command::AddUser { name, email }) => cmd_add_user(&config, name, email).await,
        Some(Command::Run) | None => cmd_run(&config).await,
    }
}

/// Load and validate configuration, applying the CLI base-URL override.
fn load_config(api_url_override: Option<String>) -> Result<Config, DashboardError> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(api_url) = api_url_override {
        config.api_base_url = api_url;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(DashboardError::InvalidConfig(e));
    }

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DEVOPS DASHBOARD - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  API Base URL: {}", config.api_base_url);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  HTTP Pool Size: {}", config.http_pool_size);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Check backend health and connection.
async fn cmd_check_health(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DEVOPS DASHBOARD - HEALTH CHECK");
    println!("======================================================================");
    println!("Host: {}", config.api_base_url);

    let client = ApiClient::new(config);

    print!("\nFetching /health... ");
    match client.fetch_health().await {
        Ok(health) => {
            println!("OK");
            println!("  Status: {}", health.status);
            println!("  Timestamp: {}", health.timestamp);
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
        }
    }

    println!("======================================================================");

    Ok(())
}

/// Add a single user and exit.
async fn cmd_add_user(config: &Config, name: String, email: String) -> anyhow::Result<()> {
    if name.is_empty() || email.is_empty() {
        return Err(anyhow::anyhow!("name and email must both be non-empty"));
    }

    let client = ApiClient::new(config);
    let new_user = NewUser { name, email };

    match client.create_user(&new_user).await {
        Ok(user) => {
            println!("{}", USER_ADDED_ACK);
            println!("  {} - {} (id {})", user.name, user.email, user.id);
        }
        Err(e) => {
            error!("failed to add user: {}", e);
        }
    }

    Ok(())
}

/// Show the dashboard, then add users interactively until EOF.
async fn cmd_run(config: &Config) -> anyhow::Result<()> {
    info!("Connecting to {}", config.api_base_url);

    let client = ApiClient::new(config);
    let mut controller = ViewController::new(client);

    controller.initialize().await;
    println!("{}", render_dashboard(controller.state()));

    println!("Add New User (empty name quits)");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(name) = prompt(&mut lines, "Name: ")? else {
            break;
        };
        if name.is_empty() {
            break;
        }

        // Email is required; re-prompt until non-empty.
        let email = loop {
            let Some(email) = prompt(&mut lines, "Email: ")? else {
                return Ok(());
            };
            if !email.is_empty() {
                break email;
            }
            println!("Email is required.");
        };

        controller.set_draft(Draft::new(name, email));
        if controller.submit().await.is_some() {
            println!("{}", USER_ADDED_ACK);
        }

        println!("\nUsers");
        println!("{}", render_users(controller.state()));
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn prompt<B: BufRead>(
    lines: &mut std::io::Lines<B>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
