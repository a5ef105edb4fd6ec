//! Offline runner for aura configurations
//!
//! Replays recorded frames through the engine, lints aura files and
//! normalises their ids.

mod lint;
mod report;
mod scenario;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use auralyte_core::config::{load_auras, load_catalog, save_auras};
use auralyte_core::{AuraEngine, ConfigError, EngineSettings, FixedSnapshot};

use crate::lint::lint_nodes;
use crate::report::{FrameReport, OutputFormat, format_frame, format_player};
use crate::scenario::load_scenario;

#[derive(Parser)]
#[command(version, about = "Replay and check Auralyte aura files")]
struct Cli {
    /// Write logs to a daily file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every frame of a scenario
    Run {
        #[arg(short, long)]
        auras: PathBuf,
        #[arg(short, long)]
        catalog: PathBuf,
        #[arg(short, long)]
        scenario: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Use engine settings from the config directory
        #[arg(long)]
        user_settings: bool,
    },
    /// Report suspicious entries in an aura file
    Lint {
        #[arg(short, long)]
        auras: PathBuf,
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Exit with status 1 if anything is reported
        #[arg(long)]
        strict: bool,
    },
    /// Renumber ids and save the file in place
    Reindex {
        #[arg(short, long)]
        auras: PathBuf,
    },
    /// Show the engine settings from the config directory
    Settings {
        /// Write them back, creating the file with defaults if missing
        #[arg(long)]
        write: bool,
    },
}

/// Initialize logging to stderr, or to a daily rolling file when a directory is given.
fn init_logging(log_dir: Option<&Path>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Some(dir) = log_dir {
        let appender = tracing_appender::rolling::daily(dir, "auralyte-validate.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        return Some(guard);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.as_deref());

    let result = match cli.command {
        Commands::Run { auras, catalog, scenario, format, user_settings } => {
            run(&auras, &catalog, &scenario, format, user_settings)
        }
        Commands::Lint { auras, catalog, strict } => lint(&auras, catalog.as_deref(), strict),
        Commands::Reindex { auras } => reindex(&auras),
        Commands::Settings { write } => settings(write),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(
    auras: &Path,
    catalog: &Path,
    scenario: &Path,
    format: OutputFormat,
    user_settings: bool,
) -> Result<ExitCode, ConfigError> {
    let config = load_auras(auras)?;
    let catalog = load_catalog(catalog)?;
    let scenario = load_scenario(scenario)?;
    let settings = if user_settings {
        EngineSettings::load()
    } else {
        EngineSettings::default()
    };

    let mut engine = AuraEngine::new(catalog, settings);
    let outcomes: Vec<_> = scenario
        .frames
        .iter()
        .map(|record| engine.run_frame(&config.nodes, &FixedSnapshot::from(record)))
        .collect();
    tracing::info!(frames = outcomes.len(), "Scenario replayed");

    match format {
        OutputFormat::Text => {
            for (i, (record, outcome)) in scenario.frames.iter().zip(&outcomes).enumerate() {
                let player = format_player(record.job, record.level);
                print!("{}", format_frame(i + 1, &player, outcome));
            }
        }
        OutputFormat::Json => {
            let reports: Vec<_> = outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| FrameReport::new(i + 1, outcome))
                .collect();
            match serde_json::to_string_pretty(&reports) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode report");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn lint(auras: &Path, catalog: Option<&Path>, strict: bool) -> Result<ExitCode, ConfigError> {
    let config = load_auras(auras)?;
    let catalog = catalog.map(load_catalog).transpose()?;

    let warnings = lint_nodes(&config.nodes, catalog.as_ref());
    for warning in &warnings {
        println!("{}", warning);
    }
    println!("{} warning(s)", warnings.len());

    if strict && !warnings.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn reindex(auras: &Path) -> Result<ExitCode, ConfigError> {
    let mut config = load_auras(auras)?;
    save_auras(auras, &mut config.nodes)?;
    Ok(ExitCode::SUCCESS)
}

fn settings(write: bool) -> Result<ExitCode, ConfigError> {
    let settings = EngineSettings::load();
    println!("require_player = {}", settings.require_player);
    println!("blocking_interfaces = {:?}", settings.blocking_interfaces);

    if write {
        settings.store()?;
        tracing::info!("Engine settings written");
    }
    Ok(ExitCode::SUCCESS)
}
