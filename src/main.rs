// SPDX-License-Identifier: PMPL-1.0-or-later

//! keyloc: report the natural languages this machine can type in

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keyloc::report::{self, OutputFormat};
use keyloc::{LanguageProbe, Platform, ProbeConfig};
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

#[derive(Parser)]
#[command(name = "keyloc")]
#[command(version)]
#[command(about = "List the keyboard input languages configured on this machine")]
#[command(long_about = None)]
struct Cli {
    /// Log source and command detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read the sources of another platform (default: this one)
    #[arg(long, global = true, value_enum)]
    platform: Option<Platform>,

    /// Kill OS commands that run longer than this many milliseconds
    #[arg(long, global = true, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Query all sources concurrently
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every language available for input
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Show English language names next to codes (text output)
        #[arg(short, long)]
        names: bool,
    },

    /// Check whether languages are available; exits 1 if any is not
    Check {
        /// Language codes or tags such as en, ko-KR, pt_BR
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },

    /// Show what each OS source reported
    Sources {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = ProbeConfig::from_env().context("reading KEYLOC_* environment")?;
    if cli.platform.is_some() {
        config.platform = cli.platform;
    }
    if let Some(ms) = cli.timeout_ms {
        config.command_timeout = (ms > 0).then(|| Duration::from_millis(ms));
    }
    config.parallel |= cli.parallel;
    debug!(?config, "probe configuration");

    let probe = LanguageProbe::from_config(&config);

    match cli.command {
        Commands::List { format, names } => {
            let survey = probe.survey().context("querying input languages")?;
            print!("{}", format.render(&survey, names)?);
        }

        Commands::Check { codes } => {
            let survey = probe.survey().context("querying input languages")?;
            let mut all_supported = true;
            for code in &codes {
                if survey.contains(code) {
                    println!("Language '{}' is supported as a keyboard input.", code);
                } else {
                    all_supported = false;
                    println!("Language '{}' is not supported as a keyboard input.", code);
                }
            }
            if !all_supported {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Sources { format } => {
            let survey = probe.survey().context("querying input sources")?;
            match format {
                OutputFormat::Text => print!("{}", report::sources_as_text(&survey)),
                other => print!("{}", other.render(&survey, false)?),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("keyloc={}", level).parse()?),
        )
        .init();
    Ok(())
}
