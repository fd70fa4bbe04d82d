//! Revivo CLI
//!
//! Generates a mock vitals dataset and prints the dashboard for the
//! selected category:
//! - Show the dashboard as a table, JSON or CSV
//! - Print or write the default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use revivo::config::{generate_default_config, Config, LoggingConfig};
use revivo::report::{render, ReportFormat};
use revivo::vitals::{Category, DayCount, PatientProfile, ReferenceData};
use revivo::DashboardSession;

#[derive(Parser)]
#[command(name = "revivo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Body and mind vitality dashboard over synthetic health data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/revivo/config.toml or ./revivo.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a dataset and show the dashboard
    Show {
        /// Category to display (BODY or MIND)
        #[arg(short, long)]
        category: Option<Category>,
        /// Days of data to generate
        #[arg(short, long, allow_hyphen_values = true)]
        days: Option<i64>,
        /// Seed for a reproducible dataset
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            category,
            days,
            seed,
            format,
        } => {
            let config = load_config(cli.config)?;
            let days = match days {
                Some(d) => DayCount::from_signed(d)?,
                None => config.generator.day_count()?,
            };
            let category = match category {
                Some(c) => c,
                None => config.generator.initial_category()?,
            };
            let seed = seed.or(config.generator.seed);

            tracing::info!("Revivo Vitality Tracker v{}", env!("CARGO_PKG_VERSION"));

            let reference =
                ReferenceData::default().with_profile(PatientProfile::from(&config.profile));
            let session = DashboardSession::load(days, seed)
                .with_reference(reference)
                .with_category(category);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            render(&session, format, &mut out).context("failed to write dashboard")?;
            out.flush()?;
        }

        Commands::Config { output } => {
            init_logging(&LoggingConfig::default());
            write_default_config(output)?;
        }
    }

    Ok(())
}

/// Load the config, then start logging with its settings
///
/// A config file that exists but is invalid stops the program.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let (config, source) = match path {
        Some(path) => (Config::load_with_env(&path)?, Some(path)),
        None => Config::load_default()?,
    };
    init_logging(&config.logging);

    match source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    Ok(config)
}

fn write_default_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &config)
                .with_context(|| format!("failed to write {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

/// Logs go to stderr so reports on stdout stay machine-readable
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("revivo={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
