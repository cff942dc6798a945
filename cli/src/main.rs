//! Campaign CLI
//!
//! Command-line editor for loyalty campaign configurations.
//!
//! # Usage
//!
//! ```bash
//! campaign new --label "Printemps"
//! campaign simulate --win-rate --gift "Boisson:DRINK:5" --min-purchase 10
//! campaign simulate --script edits.json --save
//! campaign show campaign.json --format yaml
//! campaign validate-target instagram https://instagram.com/la_frite
//! campaign pin 1234 1234
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "campaign")]
#[command(author = "Loyalty Games")]
#[command(version)]
#[command(about = "Loyalty campaign configuration editor", long_about = None)]
struct Cli {
    /// Output format [default: table]
    #[arg(long, short, env = "CAMPAIGN_FORMAT")]
    format: Option<output::OutputFormat>,

    /// Named config file (~/.campaign/config.<NAME>.toml)
    #[arg(long, short)]
    config: Option<String>,

    /// Subscription tier: premium or basic
    #[arg(long, short, env = "CAMPAIGN_PROFILE")]
    profile: Option<String>,

    /// Which condition toggle wins: min_purchase_first or all_conditions_first
    #[arg(long, env = "CAMPAIGN_PRECEDENCE")]
    precedence: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a campaign with the sample configuration
    New {
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        place: Option<String>,
        #[arg(long, env = "CAMPAIGN_EDITOR")]
        created_by: Option<String>,
    },
    /// Check and display a saved campaign (JSON or YAML)
    Show { file: PathBuf },
    /// Apply edits to a new campaign and print the reconciled result
    Simulate(SimulateArgs),
    /// Check an action target URL
    ValidateTarget {
        /// GOOGLE_REVIEW, INSTAGRAM, FACEBOOK or TIKTOK
        action_type: String,
        target: String,
    },
    /// List games, action types and gift categories
    Catalog,
    /// Configure the staff PIN
    Pin { pin: String, confirmation: String },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Edits are applied in flag order: gifts, removals, condition toggles,
/// win rate, actions, game, colors, then the script.
#[derive(clap::Args)]
struct SimulateArgs {
    /// Add a gift, e.g. "Boisson:DRINK:5" or "Menu::unlimited"
    #[arg(long = "gift", value_name = "NAME:TYPE:LIMIT")]
    gifts: Vec<String>,

    /// Remove the gift at this position (0-based)
    #[arg(long = "remove-gift", value_name = "INDEX")]
    remove_gifts: Vec<usize>,

    /// Apply "Pour tous les gains"
    #[arg(long)]
    all_conditions: bool,

    /// Require a minimum purchase of this amount
    #[arg(long, value_name = "AMOUNT")]
    min_purchase: Option<String>,

    /// 100% winning game
    #[arg(long)]
    win_rate: bool,

    /// Add an action, e.g. "INSTAGRAM=https://instagram.com/la_frite"
    #[arg(long = "action", value_name = "TYPE=URL")]
    actions: Vec<String>,

    /// WHEEL, MYSTERY, SLOT_MACHINE or CARD
    #[arg(long)]
    game: Option<String>,

    /// "PRIMARY,SECONDARY" hex colors
    #[arg(long, value_name = "PRIMARY,SECONDARY")]
    colors: Option<String>,

    /// JSON or YAML list of edit commands
    #[arg(long, short)]
    script: Option<PathBuf>,

    /// Report rejected edits and carry on
    #[arg(long)]
    keep_going: bool,

    /// Submit the result once all edits are applied
    #[arg(long)]
    save: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = config::Config::load(cli.config.as_deref()).unwrap_or_default();
    let settings = match commands::Settings::resolve(&cli, &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::New { label, place, created_by } => {
            commands::campaign::new(label, place, created_by, &settings)
        }
        Commands::Show { file } => commands::campaign::show(&file, &settings),
        Commands::Simulate(args) => commands::campaign::simulate(args, &settings).await,
        Commands::ValidateTarget { action_type, target } => {
            commands::catalog::validate_target(&action_type, &target, &settings)
        }
        Commands::Catalog => commands::catalog::list(&settings),
        Commands::Pin { pin, confirmation } => commands::pin::handle(pin, confirmation, &settings).await,
        Commands::Config { action } => commands::config::handle(action, cli.config.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
