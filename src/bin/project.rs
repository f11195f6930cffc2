//! Project an amount over weekly compounding periods
//!
//! Either at a single rate (`--rate`) or against every plan of a catalog
//! that accepts the amount (`--plans`), printing the weekly breakdown.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use compounding_engine::plans::{check_amount, load_plans};
use compounding_engine::report::{format_currency, format_percent};
use compounding_engine::{
    CompoundingEngine, PeriodSchedule, Projection, ProjectionConfig, RoundingPolicy, MAX_PERIOD_COUNT,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "project", about = "Weekly compounding projection")]
struct Args {
    /// Amount to invest
    amount: f64,

    /// Weekly return percentage (15 for 15%)
    #[arg(long, conflicts_with = "plans")]
    rate: Option<f64>,

    /// Plan catalog (.json or .csv)
    #[arg(long)]
    plans: Option<PathBuf>,

    /// Number of weekly periods
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PERIOD_COUNT as i64))]
    periods: Option<u32>,

    /// Rounding between periods: unrounded or per-period-cents
    #[arg(long)]
    rounding: Option<RoundingPolicy>,

    /// Start date (YYYY-MM-DD) to print period end dates
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Projection config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<ProjectionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => ProjectionConfig::default(),
    };
    if let Some(periods) = args.periods {
        config.period_count = periods;
    }
    if let Some(rounding) = args.rounding {
        config.rounding = rounding;
    }
    if config.period_count > MAX_PERIOD_COUNT {
        bail!(
            "period_count {} exceeds the limit of {}",
            config.period_count,
            MAX_PERIOD_COUNT
        );
    }
    Ok(config)
}

fn print_projection(title: &str, projection: &Projection, schedule: Option<&PeriodSchedule>) {
    println!("\n=== {} ({}% weekly) ===", title, projection.weekly_rate_percent);
    println!("{:<6} {:<12} {:>18} {:>16}", "Week", "Date", "Value", "Profit");
    for period in &projection.periods {
        let date = schedule
            .and_then(|s| s.period_end(period.period_index))
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<12} {:>18} {:>16}",
            period.period_index,
            date,
            format_currency(period.cumulative_value),
            format_currency(period.period_profit)
        );
    }
    println!(
        "Final value: {}  Total profit: {} ({})",
        format_currency(projection.final_value()),
        format_currency(projection.total_profit()),
        format_percent(projection.total_return_pct())
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let engine = CompoundingEngine::new(config);
    let schedule = args
        .start_date
        .map(|start| PeriodSchedule::new(start, config.period_count))
        .transpose()?;

    if let Some(rate) = args.rate {
        let projection = engine.project(args.amount, rate)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        } else {
            print_projection("Projection", &projection, schedule.as_ref());
        }
        return Ok(());
    }

    let Some(path) = &args.plans else {
        bail!("either --rate or --plans is required");
    };
    let plans = load_plans(path)
        .with_context(|| format!("Failed to load plans from {}", path.display()))?;

    if let Some(message) = check_amount(args.amount, &plans).message() {
        bail!(message);
    }

    let comparisons = engine.compare_plans(args.amount, &plans)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparisons)?);
        return Ok(());
    }

    println!(
        "Plans for {} over {} weeks:",
        format_currency(args.amount),
        config.period_count
    );
    for comparison in &comparisons {
        print_projection(&comparison.plan.name, &comparison.projection, schedule.as_ref());
    }
    if let Some(schedule) = &schedule {
        println!("\nMaturity date: {}", schedule.maturity_date());
    }

    Ok(())
}
