use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "meowing-morning",
    version,
    about = "A daily greeting from your cat: weather tips, horoscope, cat photos and love notes"
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup, the love letter, then today's dashboard (default)
    Run,
    /// Save your nickname and star sign without prompts
    Setup {
        #[arg(long)]
        nickname: String,
        /// Star sign, e.g. "Leo"
        #[arg(long)]
        zodiac: String,
    },
    /// Show today's dashboard
    Dashboard(commands::dashboard::DashboardArgs),
    /// Ask the dachshund what to eat
    Food {
        /// Only pick from this category (Comfort, Noodles, Rice, Spicy, Light, Sweet)
        #[arg(long)]
        category: Option<String>,
    },
    /// Open the cat's book of answers
    Wisdom,
    /// Press a Love Recorder button
    Recorder {
        /// message, love or kiss
        action: meow_audio::RecorderAction,
    },
    /// Forget the saved profile
    Reset,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else {
        meow_core::DEFAULT_LOG_FILTER
    };
    if let Err(e) = meow_core::init_with_filter(filter) {
        eprintln!("warning: {e}");
    }

    let result = dispatch(cli).await;

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(config_path).await,
        Commands::Setup { nickname, zodiac } => {
            commands::profile::setup(config_path, &nickname, &zodiac)
        }
        Commands::Dashboard(args) => commands::dashboard::run(config_path, args).await,
        Commands::Food { category } => commands::widgets::food(category.as_deref()),
        Commands::Wisdom => commands::widgets::wisdom(),
        Commands::Recorder { action } => commands::recorder::run(config_path, action).await,
        Commands::Reset => commands::profile::reset(config_path),
        Commands::Config { action } => commands::config::run(config_path, action),
    }
}
