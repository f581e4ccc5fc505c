use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use capacity_planner::api::{AppState, create_router};
use capacity_planner::calculation::calculate;
use capacity_planner::calendar::{GermanHolidays, HolidaySource};
use capacity_planner::config::{ConfigLoader, current_year};
use capacity_planner::logging;
use capacity_planner::models::{CalculationResult, Region};
use capacity_planner::report::{Explanation, PROJECTION_NOTICE, breakdown_to_csv, export_file_name};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "capacity-planner")]
#[command(version, about = "Plannable project hours for German federal states")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate plannable hours for one year
    Calculate(CalculateArgs),
    /// List the public holidays of a state
    Holidays {
        /// Two-letter state code, e.g. NW
        #[arg(short, long)]
        region: String,

        /// Calendar year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Start the HTTP API
    Serve {
        /// Path to a planning profile
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[derive(Args)]
struct CalculateArgs {
    /// Path to a planning profile (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the profile's year
    #[arg(short, long)]
    year: Option<i32>,

    /// Override the profile's state code
    #[arg(short, long)]
    region: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file (or directory, for CSV) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn load_config(path: Option<&Path>) -> CliResult<ConfigLoader> {
    match path {
        Some(path) => {
            info!("Loading planning profile from: {}", path.display());
            Ok(ConfigLoader::load(path)?)
        }
        None => Ok(ConfigLoader::default()),
    }
}

fn render_text(result: &CalculationResult) -> String {
    let mut out = format!(
        "Plannable hours for {} ({})\n\n",
        result.year,
        result.region.name()
    );

    for (label, value) in result.metrics.labeled() {
        out.push_str(&format!("  {:<28} {:>6}\n", label, value));
    }

    out.push_str("\nYearly hours by activity\n");
    for entry in result.breakdown.positive_by_hours_desc() {
        out.push_str(&format!("  {:<28} {:>6} h\n", entry.label, entry.hours));
    }
    out.push_str(&format!(
        "  {:<28} {:>6} h\n\n",
        "Total",
        result.breakdown.total()
    ));

    out.push_str(&Explanation(&result.trace).to_string());
    out.push_str("\n\n");
    out.push_str(PROJECTION_NOTICE);
    out.push('\n');
    out
}

fn run_calculate(args: CalculateArgs) -> CliResult<()> {
    let loader = load_config(args.config.as_deref())?;

    let mut input = loader.default_input();
    if let Some(year) = args.year {
        input.year = year;
    }
    if let Some(code) = &args.region {
        input.region = code.parse::<Region>()?;
    }

    let result = calculate(&input, &GermanHolidays)?;
    info!(
        year = result.year,
        region = %result.region,
        plannable_hours = result.metrics.per_year,
        "Calculation complete"
    );

    let bytes = match args.format {
        OutputFormat::Text => render_text(&result).into_bytes(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json.into_bytes()
        }
        OutputFormat::Csv => breakdown_to_csv(&result.breakdown)?,
    };

    match args.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export_file_name(result.year, result.region))
            } else {
                path
            };
            fs::write(&path, bytes)?;
            info!("Output saved to: {}", path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}

fn run_holidays(region: &str, year: Option<i32>) -> CliResult<()> {
    let region = region.parse::<Region>()?;
    let year = year.unwrap_or_else(current_year);
    let holidays = GermanHolidays.holidays_in_year(year, region)?;

    println!("Public holidays {} ({})", year, region.name());
    for holiday in holidays {
        let marker = if holiday.falls_on_workday() { "" } else { "  (weekend)" };
        println!(
            "  {}  {:<3} {}{}",
            holiday.date.format("%Y-%m-%d"),
            holiday.date.format("%a"),
            holiday.name,
            marker
        );
    }
    Ok(())
}

async fn run_serve(config: Option<PathBuf>, addr: &str) -> CliResult<()> {
    let loader = load_config(config.as_deref())?;
    let router = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli_logger(cli.verbose);

    let outcome = match cli.command {
        Command::Calculate(args) => run_calculate(args),
        Command::Holidays { region, year } => run_holidays(&region, year),
        Command::Serve { config, addr } => run_serve(config, &addr).await,
    };

    if let Err(e) = outcome {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
