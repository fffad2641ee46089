//! Pension Projection CLI
//!
//! Command-line interface for fund projections, chart series and plan comparisons

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use pension_projection::comparison::compare_strategies;
use pension_projection::output::{write_json, write_series, SeriesFormat};
use pension_projection::{ModelConfig, ScenarioRunner};

#[derive(Parser)]
#[command(name = "pension_projection", version, about = "Compare pension savings against a direct investment")]
struct Cli {
    /// JSON model config; environment variables override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single contribution
    Project {
        #[arg(long)]
        entry_age: u32,
        #[arg(long)]
        exit_age: u32,
        /// Gross contribution, defaults to the fiscal cap
        #[arg(long)]
        contribution: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Write chart series over a range of entry ages
    Series {
        #[arg(long, value_delimiter = ',', default_value = "60,67")]
        exit_ages: Vec<u32>,
        #[arg(long, default_value_t = 18)]
        from: u32,
        #[arg(long, default_value_t = 66)]
        to: u32,
        #[arg(long)]
        contribution: Option<f64>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare yearly savings plans
    Compare {
        #[arg(long)]
        years: Option<u32>,
        #[arg(long)]
        annual: Option<f64>,
        #[arg(long)]
        monthly: Option<f64>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ModelConfig::load(cli.config.as_deref()).context("Failed to load model config")?;
    let runner = ScenarioRunner::new(config.fund.clone(), config.reference());

    match cli.command {
        Command::Project {
            entry_age,
            exit_age,
            contribution,
            json,
        } => {
            let gross = contribution.unwrap_or(config.fund.fiscal_cap);
            let point = runner
                .run(entry_age, exit_age, gross)
                .with_context(|| format!("Projection failed for entry age {}, exit age {}", entry_age, exit_age))?;

            if json {
                write_json(io::stdout().lock(), &point)?;
                println!();
                return Ok(());
            }

            let p = &point.projection;
            println!("Projection {} -> {} ({} years)", p.entry_age, p.exit_age, p.periods);
            println!("  Gross contribution:   {:>12.2}", p.gross_contribution);
            println!("  Net basis:            {:>12.2}", p.net_contribution_basis);
            println!("  Gross accumulation:   {:>12.2}", p.gross_accumulation);
            println!("  Withdrawal tax:       {:>12.2}", p.withdrawal_tax);
            println!("  Net proceeds:         {:>12.2}", p.net_proceeds);
            println!("  Absolute return:      {:>12.2}", p.absolute_return);
            println!("  Annualized return:    {:>11.4}%", p.annualized_return * 100.0);
            println!(
                "  Reference ({:.2}%):    {:>12.2}",
                runner.reference().reference_rate() * 100.0,
                point.reference_value
            );
        }
        Command::Series {
            exit_ages,
            from,
            to,
            contribution,
            format,
            output,
        } => {
            let gross = contribution.unwrap_or(config.fund.fiscal_cap);
            let series = runner.run_scenarios(from..=to, &exit_ages, gross);

            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };

            let format = match format {
                Format::Csv => SeriesFormat::Csv,
                Format::Json => SeriesFormat::Json,
            };
            write_series(writer, &series, format).context("Failed to write series")?;

            if let Some(path) = output {
                info!("Series written to {}", path.display());
            }
        }
        Command::Compare {
            years,
            annual,
            monthly,
            json,
        } => {
            let mut plan = config.comparison.clone();
            if let Some(years) = years {
                plan.years = years;
            }
            if let Some(annual) = annual {
                plan.annual_contribution = annual;
            }
            if let Some(monthly) = monthly {
                plan.monthly_direct_contribution = monthly;
            }

            let outcome = compare_strategies(&plan, &config.fund);
            if json {
                write_json(io::stdout().lock(), &outcome)?;
                println!();
                return Ok(());
            }

            println!("After {} years:", outcome.years);
            println!(
                "  Direct investment instead of pension:      {:>14.2}",
                outcome.direct_instead_of_pension
            );
            println!(
                "  Pension + tax relief invested directly:    {:>14.2}",
                outcome.pension_with_relief_invested
            );
            println!(
                "  Monthly {:.0} invested directly:           {:>14.2}",
                plan.monthly_direct_contribution, outcome.direct_monthly_plan
            );
        }
    }

    Ok(())
}
