//! Attempt & Lazy - CLI

use anyhow::{Context, Result};
use attempt_lazy::demos::{self, DEMOS};
use attempt_lazy::util::config::{
    load_config_from, load_user_config, save_config_to, save_user_config, UserConfig,
};
use attempt_lazy::util::logger;
use attempt_lazy::{NAME, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Runnable exercises for the Attempt and Lazy containers
#[derive(Parser, Debug)]
#[command(name = "attempt-lazy")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored headings
    #[arg(long)]
    no_color: bool,

    /// Config file to use instead of the user-level one
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the named demos
    Run {
        /// Demo names, in the order to run them
        #[arg(value_name = "DEMO", required = true)]
        demos: Vec<String>,
    },

    /// Run the default demo set (the default command)
    All,

    /// List available demos
    List,

    /// Write a config file with default values
    InitConfig,

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_user_config().context("Failed to load user config")?,
    };

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_with_level(config.log.level);
    }
    debug!("host: {}", std::env::consts::OS);

    let colors = config.demo.colors && !args.no_color;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::All) {
        Commands::Run { demos: names } => {
            demos::run_named(names.as_slice(), &mut out, colors).context("Failed to run demos")?;
        }
        Commands::All => {
            demos::run_named(config.demo.default.as_slice(), &mut out, colors)
                .context("Failed to run default demos")?;
        }
        Commands::List => {
            for demo in DEMOS {
                writeln!(out, "{:<10} {}", demo.name, demo.summary)?;
            }
        }
        Commands::InitConfig => {
            let defaults = UserConfig::default();
            let path = match &args.config {
                Some(path) => {
                    save_config_to(&defaults, path)
                        .with_context(|| format!("Failed to write config: {}", path.display()))?;
                    path.clone()
                }
                None => save_user_config(&defaults).context("Failed to write user config")?,
            };
            writeln!(out, "wrote {}", path.display())?;
        }
        Commands::Version => {
            writeln!(out, "{} {}", NAME, VERSION)?;
        }
    }

    Ok(())
}
