//! Trinomial CLI - Command Line Front End for the Trinomial Random Walk
//!
//! # Commands
//!
//! - `trinomial stats` - Closed-form terminal mean and volatility
//! - `trinomial path` - Sample and print a single trajectory
//! - `trinomial analyse` - Monte Carlo KPIs, convergence check and histogram
//!
//! Probabilities are entered as integer percentages; the down move takes
//! the remainder. Settings come from `trinomial.toml`, then `TRINOMIAL_*`
//! environment variables, then flags.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{build_config, CliConfig, CliOverrides, ConfigError, LogLevel, OutputFormat};
use error::Result;

/// Trinomial random walk simulator
#[derive(Parser)]
#[command(name = "trinomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TRINOMIAL_CONFIG", default_value = "trinomial.toml")]
    config: PathBuf,

    /// Seed for reproducible sampling
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Walk parameters shared by every command
#[derive(Args, Debug, Clone, Default)]
struct WalkArgs {
    /// Number of steps per path
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Percentage chance of an up move
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=100))]
    up: Option<u32>,

    /// Percentage chance of staying put
    #[arg(short = 'z', long, value_parser = clap::value_parser!(u32).range(0..=100))]
    neutral: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the theoretical terminal mean and volatility
    Stats {
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Sample a single trajectory
    Path {
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Run a Monte Carlo batch and compare it with theory
    Analyse {
        #[command(flatten)]
        walk: WalkArgs,

        /// Number of simulated paths
        #[arg(short = 'm', long)]
        simulations: Option<usize>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (walk, simulations) = match &self.command {
            Commands::Stats { walk } | Commands::Path { walk } => (walk, None),
            Commands::Analyse { walk, simulations } => (walk, *simulations),
        };
        CliOverrides {
            verbose: self.verbose,
            format: self.format,
            seed: self.seed,
            steps: walk.steps,
            up: walk.up,
            neutral: walk.neutral,
            simulations,
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Runs the selected command on a loaded configuration.
///
/// Failures, including configuration errors, are logged as `error!`
/// events before being returned.
fn run<W: Write>(
    cli: &Cli,
    loaded: std::result::Result<CliConfig, ConfigError>,
    out: &mut W,
) -> anyhow::Result<()> {
    let result = loaded
        .with_context(|| format!("loading configuration from {}", cli.config.display()))
        .and_then(|config| execute(&cli.command, &config, out).map_err(anyhow::Error::from));

    if let Err(err) = &result {
        error!(error = %format!("{:#}", err), "trinomial failed");
    }
    result
}

fn execute<W: Write>(command: &Commands, config: &CliConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Stats { .. } => commands::stats::run(config, out),
        Commands::Path { .. } => commands::path::run(config, out),
        Commands::Analyse { .. } => commands::analyse::run(config, out),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = build_config(&cli.config, &cli.overrides());
    let level = match &loaded {
        Ok(config) => config.log_level,
        Err(_) if cli.verbose => LogLevel::Debug,
        Err(_) => LogLevel::default(),
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, loaded, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn run_captured(
        args: &[&str],
        loaded: std::result::Result<CliConfig, ConfigError>,
    ) -> (anyhow::Result<()>, String, String) {
        let logs = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();

        let result = tracing::subscriber::with_default(subscriber, || run(&cli, loaded, &mut out));
        (result, logs.contents(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_command_failure_is_logged() {
        let mut config = CliConfig::default();
        config.walk.up = 70;
        config.walk.neutral = 40;

        let (result, logs, out) = run_captured(&["trinomial", "stats"], Ok(config));

        assert!(result.is_err());
        assert!(out.is_empty());
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("trinomial failed"));
        assert!(logs.contains("walk.up + walk.neutral"));
    }

    #[test]
    fn test_config_failure_is_logged() {
        let (result, logs, _) = run_captured(
            &["trinomial", "--config", "bad.toml", "path"],
            Err(ConfigError::InvalidFormat("csv".to_string())),
        );

        assert!(result.is_err());
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("loading configuration from bad.toml"));
        assert!(logs.contains("csv"));
    }

    #[test]
    fn test_successful_run_logs_no_error() {
        let mut config = CliConfig::default();
        config.walk.seed = Some(4);

        let (result, logs, out) = run_captured(&["trinomial", "path"], Ok(config));

        assert!(result.is_ok());
        assert!(!logs.contains("ERROR"));
        assert!(out.contains("Single trajectory"));
    }
}
