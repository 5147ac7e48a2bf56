//! Library Admin - command-line client for librarians
//!
//! Signs in against the library management API and manages books, clients
//! and loans.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_admin::{config::AppConfig, AdminApp};

use commands::{BookCommand, ClientCommand, LoanCommand};

#[derive(Parser)]
#[command(name = "library-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL (overrides configuration)
    #[arg(long, global = true, env = "LIBRARY_API_URL")]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and keep the session token
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "LIBRARY_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Close the session
    Logout,

    /// Validate the stored session against the API
    Status,

    /// Manage the book catalog
    #[command(subcommand)]
    Books(BookCommand),

    /// Manage clients
    #[command(subcommand)]
    Clients(ClientCommand),

    /// Manage loans
    #[command(subcommand)]
    Loans(LoanCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    init_tracing(&config, cli.verbose);
    tracing::debug!(api = %config.api.base_url, "library-admin v{}", env!("CARGO_PKG_VERSION"));

    let app = AdminApp::new(config)?;

    let outcome = match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&app, &email, &password, cli.json).await
        }
        Commands::Logout => commands::session::logout(&app),
        Commands::Status => commands::session::status(&app, cli.json).await,
        Commands::Books(command) => commands::books::run(&app, command, cli.json).await,
        Commands::Clients(command) => commands::clients::run(&app, command, cli.json).await,
        Commands::Loans(command) => commands::loans::run(&app, command, cli.json).await,
    };

    outcome.map_err(commands::report)
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.logging.level.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_admin={}", level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
