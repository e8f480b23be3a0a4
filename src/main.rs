//! Compound Growth CLI
//!
//! Command-line interface for projecting compound-interest schedules

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::info;

use compound_growth::inputs::{load_request, load_scenarios};
use compound_growth::report::{write_csv_to_path, Locale, ReportConfig};
use compound_growth::{AppState, RawInputs, ScenarioRunner};

#[derive(Parser)]
#[command(name = "compound-growth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a single schedule
    Project(ProjectArgs),

    /// Project every scenario in a CSV file and write a summary row for each
    Batch {
        /// Scenario file (Name,Principal,Years,RatePercent,RateType,CompoundMonthly,Contribution)
        #[arg(short, long)]
        scenarios: PathBuf,

        /// Summary output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ProjectArgs {
    /// Initial balance
    #[arg(long, required_unless_present = "request")]
    principal: Option<String>,

    /// Number of years
    #[arg(long, required_unless_present = "request")]
    years: Option<String>,

    /// Rate in percent
    #[arg(long, required_unless_present = "request")]
    rate: Option<String>,

    /// The rate is per month rather than per year
    #[arg(long)]
    rate_monthly: bool,

    /// Compound yearly instead of monthly
    #[arg(long)]
    yearly: bool,

    /// Amount added each month
    #[arg(long)]
    contribution: Option<String>,

    /// Read the run from a JSON request file instead of flags
    #[arg(long, conflicts_with_all = ["principal", "years", "rate", "contribution"])]
    request: Option<PathBuf>,

    /// Label language
    #[arg(long, value_enum, default_value_t = Locale::English)]
    locale: Locale,

    /// Start date for the CSV date column (YYYY-MM-DD, default today)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write the CSV export to this file, or to a timestamped file in the
    /// current directory when no path is given
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    csv: Option<Option<PathBuf>>,

    /// Print the schedule as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project(args) => run_project(args),
        Commands::Batch { scenarios, output } => run_batch(&scenarios, output.as_deref()),
    }
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let mut report = ReportConfig {
        locale: args.locale,
        ..Default::default()
    };
    if let Some(start_date) = args.start_date {
        report.start_date = start_date;
    }
    let mut state = AppState::new(report);

    if let Some(path) = &args.request {
        let params = load_request(path)
            .with_context(|| format!("failed to load request {}", path.display()))?;
        state.calculate_params(&params);
    } else {
        let inputs = RawInputs {
            principal: args.principal.clone().unwrap_or_default(),
            period_count: args.years.clone().unwrap_or_default(),
            rate_percent: args.rate.clone().unwrap_or_default(),
            rate_is_monthly: args.rate_monthly,
            compound_monthly: !args.yearly,
            periodic_contribution: args.contribution.clone().unwrap_or_default(),
        };
        state
            .calculate(&inputs)
            .context("please fill in every field with a non-negative number")?;
    }

    let schedule = state.schedule().context("no schedule calculated")?;
    info!("projected {} periods", schedule.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
    } else {
        print!("{}", state.render()?);
    }

    match &args.csv {
        Some(Some(path)) => {
            write_csv_to_path(schedule, &state.report, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("\nCSV written to: {}", path.display());
        }
        Some(None) => {
            let path = state
                .export_csv_file(Path::new("."))
                .context("failed to export into the current directory")?;
            println!("\nCSV written to: {}", path.display());
        }
        None => {}
    }

    Ok(())
}

fn run_batch(scenarios: &Path, output: Option<&Path>) -> Result<()> {
    let scenarios = load_scenarios(scenarios)
        .with_context(|| format!("failed to load scenarios from {}", scenarios.display()))?;

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_batch(&scenarios);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            runner.write_summaries(&outcomes, file)?;
            println!("Summary written to: {}", path.display());
        }
        None => runner.write_summaries(&outcomes, io::stdout().lock())?,
    }

    Ok(())
}
