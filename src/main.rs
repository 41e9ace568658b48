use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use stringency::{compare, CompareRequest, Comparison};
use stringency_core::{CompareConfig, CountryTable, DateWindow, EngineSelection};
use stringency_dtw::{Dtw, StepPattern, Window};
use stringency_io::{parse_date, ReportWriter, RunName, SvgChart};

#[derive(Parser)]
#[command(name = "stringency")]
#[command(about = "Find countries whose COVID-19 policy stringency tracked a focal country's")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rank countries by Euclidean and DTW distance to a focal country
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Country to compare against, spelled as in the policy table
    #[arg(long)]
    focal: String,

    /// Path to the daily policy CSV
    #[arg(long, default_value = "OxCGRT_latest.csv")]
    policy: PathBuf,

    /// Path to the population CSV (thousands, column pop2020)
    #[arg(long, default_value = "worldPop2020.csv")]
    population: PathBuf,

    /// First day of the window, YYYY-MM-DD or YYYYMMDD
    #[arg(long, default_value = "2020-04-01", value_parser = cli_date)]
    start: NaiveDate,

    /// Day after the last day of the window, YYYY-MM-DD or YYYYMMDD
    #[arg(long, default_value = "2020-05-01", value_parser = cli_date)]
    end: NaiveDate,

    /// Keep only countries with a population strictly above this
    #[arg(long, default_value_t = CompareConfig::DEFAULT_MIN_POPULATION)]
    min_population: f64,

    /// Number of countries to report per engine
    #[arg(long, default_value_t = CompareConfig::DEFAULT_TOP_K)]
    top_k: usize,

    /// Compare against every continent, not only the focal country's
    #[arg(long, default_value_t = false)]
    no_continent_filter: bool,

    /// Engines to run: "both", "euclidean" or "dtw"
    #[arg(long, default_value = "both")]
    engine: String,

    /// Sakoe-Chiba warping window radius (unconstrained if not set)
    #[arg(long)]
    window_radius: Option<usize>,

    /// DTW step pattern: "symmetric1" or "symmetric2"
    #[arg(long, default_value = "symmetric1")]
    step_pattern: String,

    /// Directory for JSON rankings and SVG charts (nothing is written if not set)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Prefix for output files (defaults to the focal country, slugified)
    #[arg(long)]
    name: Option<String>,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    artifacts: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Compare(args) => run_compare(args)?,
    }

    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let window = DateWindow::new(args.start, args.end)?;
    let step: StepPattern = args.step_pattern.parse().map_err(anyhow::Error::msg)?;
    let dtw = Dtw::unconstrained()
        .with_step_pattern(step)
        .with_window(args.window_radius.map_or(Window::Unconstrained, Window::SakoeChiba));

    let config = CompareConfig::new(window)
        .with_min_population(args.min_population)?
        .with_top_k(args.top_k)?
        .with_filter_by_continent(!args.no_continent_filter)
        .with_dtw(dtw)
        .with_engines(parse_engines(&args.engine)?);

    let request = CompareRequest::new(args.focal.clone(), config)
        .with_policy_path(args.policy.clone())
        .with_population_path(args.population.clone());

    let resolver = CountryTable::builtin();
    let comparison = compare(&request, &resolver)
        .with_context(|| format!("comparison for \"{}\" failed", args.focal))?;

    let mut artifacts = Vec::new();
    if let Some(output_dir) = &args.output_dir {
        let run = match args.name {
            Some(name) => RunName::new(name)?,
            None => RunName::from_country(&args.focal),
        };
        let writer = ReportWriter::new(output_dir, run)?;
        let renderer = SvgChart::default();
        for report in &comparison.reports {
            artifacts.push(writer.write_ranking(
                report.kind,
                &args.focal,
                comparison.window,
                &report.selected,
            )?);
            artifacts.push(writer.write_chart(report.kind, &report.chart, &renderer)?);
        }
        info!(n_artifacts = artifacts.len(), dir = %output_dir.display(), "reports written");
    }

    let output = CompareOutput {
        comparison: &comparison,
        artifacts,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cli_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).ok_or_else(|| format!("invalid date \"{raw}\": expected YYYY-MM-DD or YYYYMMDD"))
}

fn parse_engines(s: &str) -> Result<EngineSelection> {
    match s {
        "both" => Ok(EngineSelection::Both),
        "euclidean" => Ok(EngineSelection::Euclidean),
        "dtw" => Ok(EngineSelection::Dtw),
        other => bail!("unknown engine \"{other}\": expected both, euclidean or dtw"),
    }
}
