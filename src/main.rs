use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use travel_expenses::cli::{handle_report_command, OutputFormat, ReportOptions};
use travel_expenses::config::Settings;

#[derive(Parser)]
#[command(
    name = "travel-expenses",
    version,
    about = "Print today's travel expense report",
    long_about = "Prints the travel expenses of the day with per-kind spending \
                  limits flagged, followed by the meal subtotal and the grand total."
)]
struct Cli {
    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(short, long, env = "TRAVEL_EXPENSES_DATE")]
    date: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Group expense lines by category (text output only)
    #[arg(long)]
    by_category: bool,

    /// Path to a JSON settings file
    #[arg(short, long, env = "TRAVEL_EXPENSES_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr, overriding RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    let options = ReportOptions {
        date: cli.date,
        format: cli.format,
        by_category: cli.by_category,
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle_report_command(&options, &settings, &mut handle)?;

    Ok(())
}
