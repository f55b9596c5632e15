mod report;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::{info, warn};
use parrondo_game::{GameMode, SimulationConfig, SimulationError, run_simulation};
use std::io::{BufWriter, Write, stdout};
use std::process::ExitCode;
use std::time::Instant;

use report::{ReferenceRatios, write_console, write_header, write_json, write_markdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain text lines with the analytic reference values
    Console,
    /// Pretty-printed JSON document
    Json,
    /// Markdown summary table
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "parrondo", version)]
#[command(about = "Astumian's stochastic games: two losing games that win when alternated")]
struct Args {
    /// Game type: 0 (game A), 1 (game B), 2 (uniform switching) or 3 (correlated switching)
    #[arg(allow_negative_numbers = true)]
    game: i64,

    /// Number of independent trials to run
    #[arg(allow_negative_numbers = true)]
    trials: i64,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,
}

const USAGE: &str = "usage: parrondo <game> <trials> [--report console|json|markdown]
\t<game> - integer game-type of 0, 1, 2 (uniform) or 3 (correlated)
\t<trials> - non-negative integer number of trials to perform";

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    let mut out = BufWriter::new(stdout());
    if let Err(err) = run(&config, args.report, &mut out).and_then(|()| Ok(out.flush()?)) {
        eprintln!("{} {err:#}", "error:".red().bold());
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

/// Turn raw positional arguments into a runnable configuration.
fn resolve_config(args: &Args) -> Result<SimulationConfig, SimulationError> {
    let mode = GameMode::try_from(args.game)?;
    let trials = u64::try_from(args.trials).map_err(|_| SimulationError::InvalidParameter {
        field: "number of trials",
        reason: format!("must be non-negative (got {})", args.trials),
    })?;
    Ok(SimulationConfig::new(mode, trials))
}

fn run(config: &SimulationConfig, format: ReportFormat, out: &mut dyn Write) -> Result<()> {
    if format == ReportFormat::Console {
        write_header(out, config.mode, config.trials)?;
    }

    info!(
        "running {} trials of {} with seed {}",
        config.trials, config.mode, config.seed
    );
    let start = Instant::now();
    let result = run_simulation(config)?;
    info!("simulation finished in {:?}", start.elapsed());
    if result.ratio().is_none() {
        warn!("no trials were won; losses/wins is undefined");
    }

    let reference = ReferenceRatios::load()?;
    match format {
        ReportFormat::Console => write_console(out, &result, &reference),
        ReportFormat::Json => write_json(out, &result, &reference),
        ReportFormat::Markdown => write_markdown(out, &result, &reference),
    }
}
