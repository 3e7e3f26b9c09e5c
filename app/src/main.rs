use std::fs;
use std::path::{Path, PathBuf};

use analytics::{OPEN_POSITION_MARKER, Report, Trade};
use anyhow::{Context, Result};
use backtester::Backtester;
use clap::{Parser, Subcommand};
use indicators::MaCrossSettings;
use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;

mod generator;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A moving-average crossover backtesting tool.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a historical simulation over an OHLCV CSV file.
    Backtest {
        /// Path to the input CSV (Date,Open,High,Low,Close,Volume).
        #[arg(short, long)]
        input: PathBuf,

        /// Fast moving-average window, in bars.
        #[arg(long)]
        fast_window: Option<usize>,

        /// Slow moving-average window, in bars.
        #[arg(long)]
        slow_window: Option<usize>,

        /// Minimum rows the input must carry (defaults to the slow window).
        #[arg(long)]
        minimum_rows: Option<usize>,

        /// Also write the trade report as CSV to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Writes a synthetic random-walk OHLCV CSV for trying the simulator.
    Generate {
        /// Output path for the generated file.
        #[arg(short, long)]
        output: PathBuf,

        /// Number of daily bars to generate.
        #[arg(long, default_value_t = 500)]
        rows: usize,

        /// Closing price of the first bar.
        #[arg(long, default_value = "100")]
        start_price: Decimal,

        /// Seed for the random generator; the same seed gives the same file.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level);

    match cli.command {
        Commands::Backtest {
            input,
            fast_window,
            slow_window,
            minimum_rows,
            export,
        } => {
            let mut windows = settings.backtest.clone();
            if let Some(fast) = fast_window {
                windows.fast_window = fast;
            }
            if let Some(slow) = slow_window {
                windows.slow_window = slow;
            }
            if let Some(minimum) = minimum_rows {
                windows.minimum_rows = Some(minimum);
            }
            windows.validate()?;

            run_backtest(&input, windows, export.as_deref())?;
        }
        Commands::Generate {
            output,
            rows,
            start_price,
            seed,
        } => {
            generator::write_random_walk(&output, rows, start_price, seed)?;
            println!("Wrote {rows} bars to {}", output.display());
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level: tracing::Level = log_level.parse().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run_backtest(input: &Path, windows: MaCrossSettings, export: Option<&Path>) -> Result<()> {
    let min_rows = windows.required_rows();
    let series = market_data::load_series_from_path(input, min_rows).map_err(|err| {
        let hint = load_hint(&err);
        anyhow::Error::new(err).context(hint)
    })?;

    let (report, trades) = Backtester::new(windows).run(&series)?;

    print_trades(&trades);
    print_report(&report);

    if let Some(path) = export {
        fs::write(path, analytics::render_csv(&trades, &report))
            .with_context(|| format!("could not write the report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "trade report exported");
    }

    Ok(())
}

/// One actionable line per failure kind, so a bad upload and a short upload
/// do not read as the same problem.
fn load_hint(err: &market_data::Error) -> &'static str {
    match err {
        market_data::Error::Schema { .. } => {
            "the CSV is missing required columns; fix the header row and retry"
        }
        market_data::Error::EmptyInput => "the CSV has no data rows",
        market_data::Error::DateParse { .. } => "fix the unparseable Date values and retry",
        market_data::Error::InsufficientData { .. } => {
            "not enough history for the configured windows; provide more rows"
        }
        _ => "could not read the input file",
    }
}

// --- Console Rendering ---

fn print_trades(trades: &[Trade]) {
    if trades.is_empty() {
        println!("\nNo crossover signals detected in the provided data.");
        return;
    }

    println!("\n--- Trades ---");
    println!(
        "{:<12} {:>10} {:<14} {:>10} {:>10} {:>9} {:>10} {:>10}",
        "Buy Date", "Buy Price", "Sell Date", "Sell Price", "Profit", "Profit %", "Fast MA", "Slow MA"
    );
    for trade in trades {
        let sell_date = trade
            .sell_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| OPEN_POSITION_MARKER.to_string());
        println!(
            "{:<12} {:>10} {:<14} {:>10} {:>10} {:>9} {:>10} {:>10}",
            trade.buy_date.to_string(),
            format!("{:.2}", trade.buy_price),
            sell_date,
            format!("{:.2}", trade.sell_price),
            format!("{:.2}", trade.profit),
            format!("{:.2}", trade.profit_percent),
            format!("{:.2}", trade.fast_ma_at_sell),
            format!("{:.2}", trade.slow_ma_at_sell),
        );
    }
}

/// Helper function to print the performance report in a readable format.
fn print_report(report: &Report) {
    println!("\n--- Performance Report ---");
    println!("--------------------------");
    println!("Total Profit/Loss:  {:>10}", format!("{:.2}", report.total_profit));
    println!("Total Trades:       {:>10}", report.trade_count);
    println!("Winning Trades:     {:>10}", report.win_count);
    println!("Losing Trades:      {:>10}", report.loss_count);
    if let Some(win_rate) = report.win_rate() {
        println!("Win Rate:           {:>9.1}%", win_rate);
    }
    println!("--------------------------");
}
