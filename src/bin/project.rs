//! Project a single scenario from command-line flags or a JSON file
//!
//! Prints the text report by default, or the JSON report with `--json`.
//! `--growth-csv` additionally writes the month-by-month table.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use finance_projector::{
    project,
    report::{render_text, write_growth_csv, Report},
    ProjectionInput, RiskCategory,
};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "project", about = "Monthly budget and investment growth projection")]
struct Args {
    /// JSON scenario file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Monthly income
    #[arg(long)]
    income: Option<f64>,

    /// Monthly fixed expenses
    #[arg(long)]
    expense: Option<f64>,

    /// Monthly investment amount
    #[arg(long)]
    investment: Option<f64>,

    /// Risk category: conservative, balanced or aggressive
    #[arg(long)]
    risk: Option<RiskCategory>,

    /// Projection horizon in years (1-30)
    #[arg(long)]
    years: Option<u32>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the monthly growth table to this CSV file
    #[arg(long)]
    growth_csv: Option<PathBuf>,

    /// First calendar month of the projection (YYYY-MM), labels CSV rows
    #[arg(long, value_parser = parse_start_month)]
    start: Option<NaiveDate>,
}

fn parse_start_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM: {}", e))
}

fn load_input(args: &Args) -> Result<ProjectionInput> {
    let mut input = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ProjectionInput::from_json(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => ProjectionInput::default(),
    };

    if let Some(v) = args.income { input.monthly_income = v; }
    if let Some(v) = args.expense { input.fixed_expense = v; }
    if let Some(v) = args.investment { input.monthly_investment = v; }
    if let Some(v) = args.risk { input.risk_category = v; }
    if let Some(v) = args.years { input.horizon_years = v; }

    input.validate().context("Invalid scenario")?;
    Ok(input)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = load_input(&args)?;
    info!("Projecting {:?}", input);

    let result = project(&input);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", Report::new(&result).to_json()?),
    }

    if let Some(path) = &args.growth_csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_growth_csv(BufWriter::new(file), &result, args.start)?;
        info!("Growth table written to {}", path.display());
    }

    Ok(())
}
