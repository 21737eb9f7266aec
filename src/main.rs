//! EMI Calculator CLI
//!
//! Command-line interface for loan installment, schedule, prepayment and comparison runs

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use emi_calculator::calculator::{
    simulate, simulate_prepayment, AmortizationResult, LoanSummary, PrepaymentOutcome, ScheduleConfig,
};
use emi_calculator::comparison::load_options;
use emi_calculator::report::{format_fractional_months, format_months, write_schedule_csv};
use emi_calculator::{LoanRequest, LoanTerms};

/// Loan EMI, amortization and prepayment calculator
#[derive(Parser)]
#[command(name = "emi-calculator", version, about = "Loan EMI, amortization and prepayment calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with loan inputs; flags override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment and lifetime totals
    Emi(LoanArgs),
    /// Amortization schedule
    Schedule(ScheduleArgs),
    /// Effect of a lump-sum prepayment with the EMI held fixed
    Prepay(PrepayArgs),
    /// Rank loan offers from a CSV file (Name,Principal,Rate,Tenure)
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    principal: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Tenure in years
    #[arg(long)]
    tenure: Option<f64>,
}

impl LoanArgs {
    fn apply(&self, request: &mut LoanRequest) {
        if let Some(principal) = self.principal {
            request.principal = principal;
        }
        if let Some(rate) = self.rate {
            request.annual_rate_percent = rate;
        }
        if let Some(tenure) = self.tenure {
            request.tenure_years = tenure;
        }
    }
}

#[derive(Args)]
struct ScheduleArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Emit every Nth month
    #[arg(long)]
    stride: Option<u32>,

    /// Stop after this many months
    #[arg(long)]
    max_periods: Option<u32>,

    /// Chart sampling: every 3rd month of the first 60
    #[arg(long, conflicts_with_all = ["stride", "max_periods"])]
    chart: bool,

    /// Write the schedule as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct PrepayArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Lump-sum amount
    #[arg(long)]
    amount: Option<f64>,

    /// Month in which the lump sum is paid (1-indexed)
    #[arg(long)]
    month: Option<u32>,
}

#[derive(Args)]
struct CompareArgs {
    /// CSV file of loan offers
    #[arg(long)]
    input: PathBuf,
}

#[derive(Serialize)]
struct EmiReport {
    terms: LoanTerms,
    summary: LoanSummary,
    monthly_rate_percent: f64,
    interest_to_principal_percent: f64,
}

#[derive(Serialize)]
struct PrepaymentReport {
    terms: LoanTerms,
    prepayment_amount: f64,
    prepayment_month: u32,
    original_months: f64,
    outcome: PrepaymentOutcome,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut request = match &cli.config {
        Some(path) => LoanRequest::from_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => LoanRequest::default(),
    };

    match &cli.command {
        Commands::Emi(args) => {
            args.apply(&mut request);
            run_emi(&request, cli.output)
        }
        Commands::Schedule(args) => {
            args.loan.apply(&mut request);
            if let Some(stride) = args.stride {
                request.stride = stride;
            }
            if args.max_periods.is_some() {
                request.max_periods = args.max_periods;
            }
            let config = if args.chart {
                ScheduleConfig::chart()
            } else {
                request.schedule_config()
            };
            run_schedule(&request, config, args.csv.as_ref(), cli.output)
        }
        Commands::Prepay(args) => {
            args.loan.apply(&mut request);
            if let Some(amount) = args.amount {
                request.prepayment_amount = amount;
            }
            if let Some(month) = args.month {
                request.prepayment_month = month;
            }
            run_prepay(&request, cli.output)
        }
        Commands::Compare(args) => run_compare(args, cli.output),
    }
}

fn run_emi(request: &LoanRequest, output: OutputFormat) -> Result<()> {
    let terms = request.terms();
    let summary = LoanSummary::from_terms(&terms);
    let report = EmiReport {
        terms,
        summary,
        monthly_rate_percent: LoanSummary::monthly_rate_percent(&terms),
        interest_to_principal_percent: summary.interest_to_principal_percent(&terms),
    };

    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            println!("Loan: {:.2} at {}% for {} years", terms.principal, terms.annual_rate_percent, terms.tenure_years);
            println!("  Monthly EMI:        {:>14.2}", summary.monthly_payment);
            println!("  Total Payment:      {:>14.2}", summary.total_payment);
            println!("  Total Interest:     {:>14.2}", summary.total_interest);
            println!("  Monthly Rate:       {:>13.3}%", report.monthly_rate_percent);
            println!("  Interest/Principal: {:>13.1}%", report.interest_to_principal_percent);
            Ok(())
        }
    }
}

fn run_schedule(
    request: &LoanRequest,
    config: ScheduleConfig,
    csv_path: Option<&PathBuf>,
    output: OutputFormat,
) -> Result<()> {
    let terms = request.terms();
    let summary = LoanSummary::from_terms(&terms);
    let schedule = simulate(&terms, summary.monthly_payment, config);

    if let Some(path) = csv_path {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_schedule_csv(BufWriter::new(file), &schedule)
            .with_context(|| format!("unable to write schedule to {}", path.display()))?;
        log::info!("wrote {} schedule rows to {}", schedule.len(), path.display());
        println!("Schedule written to: {}", path.display());
        return Ok(());
    }

    match output {
        OutputFormat::Json => print_json(&schedule),
        OutputFormat::Table => {
            print_schedule_table(&schedule);
            Ok(())
        }
    }
}

fn print_schedule_table(schedule: &AmortizationResult) {
    println!("{:>5} {:>14} {:>14} {:>14} {:>16}", "Month", "EMI", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(67));

    for period in &schedule.periods {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            period.period_index,
            schedule.fixed_payment,
            period.principal_portion,
            period.interest_portion,
            period.ending_balance,
        );
    }

    println!("\nSummary ({} months simulated):", schedule.simulated_months);
    println!("  Total Payment:  {:.2}", schedule.total_payment);
    println!("  Total Interest: {:.2}", schedule.total_interest);
    println!("  Closing Balance: {:.2}", schedule.closing_balance);
}

fn run_prepay(request: &LoanRequest, output: OutputFormat) -> Result<()> {
    let terms = request.terms();
    let summary = LoanSummary::from_terms(&terms);
    let outcome = simulate_prepayment(
        &terms,
        summary.monthly_payment,
        request.prepayment_amount,
        request.prepayment_month,
    );

    let report = PrepaymentReport {
        terms,
        prepayment_amount: request.prepayment_amount,
        prepayment_month: request.prepayment_month,
        original_months: terms.total_months(),
        outcome,
    };

    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            println!("Prepayment of {:.2} in month {}", report.prepayment_amount, report.prepayment_month);
            println!("  New Tenure:     {}", format_months(outcome.revised_tenure_months));
            println!("  Time Saved:     {}", format_fractional_months(outcome.months_saved));
            println!("  Interest Saved: {:.2}", outcome.interest_saved);
            println!("  EMI:            {:.2}", outcome.unchanged_monthly_payment);
            Ok(())
        }
    }
}

fn run_compare(args: &CompareArgs, output: OutputFormat) -> Result<()> {
    let comparison = load_options(&args.input)
        .with_context(|| format!("failed to load loan options from {}", args.input.display()))?;

    match output {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ComparisonReport<'a> {
                ranked: Vec<&'a emi_calculator::LoanOption>,
                best_option: Option<u32>,
            }
            print_json(&ComparisonReport {
                ranked: comparison.ranked(),
                best_option: comparison.best_option().map(|o| o.id),
            })
        }
        OutputFormat::Table => {
            let best_id = comparison.best_option().map(|o| o.id);
            println!("{:<20} {:>14} {:>7} {:>7} {:>12} {:>16} {:>16}",
                "Name", "Principal", "Rate", "Years", "EMI", "Total Payment", "Total Interest");
            println!("{}", "-".repeat(98));
            for option in comparison.ranked() {
                let marker = if Some(option.id) == best_id { "  <- best" } else { "" };
                println!("{:<20} {:>14.2} {:>7.2} {:>7.2} {:>12.2} {:>16.2} {:>16.2}{}",
                    option.name,
                    option.terms.principal,
                    option.terms.annual_rate_percent,
                    option.terms.tenure_years,
                    option.summary.monthly_payment,
                    option.summary.total_payment,
                    option.summary.total_interest,
                    marker,
                );
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
