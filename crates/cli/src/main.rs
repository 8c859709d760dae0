//! Yahrzeit CLI - drive the page handlers from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! yahrzeit create-account -e me@example.com -p 'Abcdef1!' -c 'Abcdef1!'
//!
//! # Look up the sunset time for a date and place
//! yahrzeit sunset -d 2024-03-01 -a "Tel Aviv, Israel"
//!
//! # Click a result-page button
//! yahrzeit result -m guest -a create-account
//! ```
//!
//! # Commands
//!
//! - `create-account` - Validate and submit the account-creation form
//! - `sunset` - Fetch the sunset time and fill the time-of-day labels
//! - `result` - Activate or save a calculated result

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yahrzeit_client::ClientConfig;
use yahrzeit_core::{ResultAction, ViewMode};

mod commands;
mod console;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "yahrzeit")]
#[command(author, version, about = "Yahrzeit client tools")]
struct Cli {
    /// Override `YAHRZEIT_BASE_URL`
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and submit the account-creation form
    CreateAccount {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Retyped password
        #[arg(short, long)]
        confirm: String,
    },
    /// Look up the sunset time for a date and place
    Sunset {
        /// Date of death (`YYYY-MM-DD`)
        #[arg(short, long)]
        date: Option<String>,

        /// Formatted address of the place
        #[arg(short, long)]
        address: Option<String>,

        /// Place name
        #[arg(long)]
        name: Option<String>,

        /// Latitude
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Click a result-page button
    Result {
        /// View mode the page was rendered in (`guest`, `authenticated`)
        #[arg(short, long, default_value = "guest")]
        mode: ViewMode,

        /// Button to click (`create-account`, `login`, `save`)
        #[arg(short, long)]
        action: ResultAction,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ClientConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.base_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Command failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "yahrzeit_cli=info,yahrzeit_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Return rather than exit so the sentry guard is dropped and flushed
    finish(run(cli.command, &config).await)
}

fn finish(result: Result<(), CommandError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(base_url: Option<&str>) -> Result<ClientConfig, CommandError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = base_url {
        config.base_url = ClientConfig::for_base_url(base_url)?.base_url;
    }
    Ok(config)
}

async fn run(command: Commands, config: &ClientConfig) -> Result<(), CommandError> {
    match command {
        Commands::CreateAccount {
            email,
            password,
            confirm,
        } => commands::account::create(config, email, password, confirm).await,
        Commands::Sunset {
            date,
            address,
            name,
            lat,
            lng,
        } => {
            let place = commands::sunset::PlaceArgs {
                address,
                name,
                lat,
                lng,
            };
            commands::sunset::lookup(config, date, place).await
        }
        Commands::Result { mode, action } => commands::result::click(config, mode, action).await,
    }
}
