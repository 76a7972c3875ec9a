//! Project every scenario in a CSV file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use anyhow::{Context, Result};
use clap::Parser;
use finance_projector::{
    project,
    report::{write_batch_summary, BatchSummaryRow},
    scenario::load_scenarios,
};
use log::info;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project a CSV file of scenarios")]
struct Args {
    /// Scenario CSV (id, monthly_income, fixed_expense, monthly_investment, risk_category, horizon_years)
    #[arg(long)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let proj_start = Instant::now();
    let rows: Vec<BatchSummaryRow> = scenarios
        .par_iter()
        .map(|scenario| {
            let result = project(&scenario.input);
            BatchSummaryRow::new(scenario, &result)
        })
        .collect();
    info!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_batch_summary(BufWriter::new(file), &rows)?;

    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
