//! Command-line front end: parses a formula and a method, prints the result.

mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use optima::{Settings, SolveError};
use tracing::Level;

use crate::{
    cli::{Command, OptimaCli},
    report::Report,
};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = OptimaCli::parse();
    init_tracing(cli.verbose);

    let settings = config::load_settings(cli.config.as_deref())?;
    let settings = config::apply_flags(settings, &cli);
    tracing::debug!(target: "optima::cli", ?settings, "settings_loaded");

    match run(&cli.cmd, &settings) {
        Ok(report) => {
            println!("{}", report.render(cli.json).context("render result")?);
            Ok(())
        }
        Err(err) if cli.json => {
            println!("{}", report::error_json(&err));
            std::process::exit(1);
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!("{} failed", cli.cmd.name()))),
    }
}

fn run(cmd: &Command, settings: &Settings) -> Result<Report, SolveError> {
    Ok(match cmd {
        Command::Bisect { formula, low, high } => {
            Report::Outcome(optima::bisect(formula, *low, *high, settings)?)
        }
        Command::Golden {
            formula,
            low,
            high,
            goal,
        } => Report::Outcome(optima::golden_section(
            formula,
            *low,
            *high,
            (*goal).into(),
            settings,
        )?),
        Command::Newton {
            formula,
            x0,
            derivative,
        } => Report::Outcome(optima::newton(
            formula,
            derivative.as_deref(),
            *x0,
            settings,
        )?),
        Command::Descent {
            formula, x0, y0, ..
        } => Report::Outcome(optima::coordinate_descent(formula, [*x0, *y0], settings)?),
        Command::Integrate {
            formula,
            low,
            high,
            subintervals,
            rule,
        } => Report::Integral(optima::integrate(
            formula,
            *low,
            *high,
            *subintervals,
            (*rule).into(),
        )?),
        Command::Sample {
            formula,
            low,
            high,
            count,
        } => Report::Samples(optima::sample(formula, *low, *high, *count)?),
        Command::Diff { formula, var } => Report::Derivative(optima::differentiate(formula, var)?),
        Command::Eval { formula, x } => Report::Value {
            x: *x,
            value: optima::evaluate(formula, *x)?,
        },
    })
}
