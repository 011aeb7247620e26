use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockcast::catalog::symbols::SYMBOL_PROFILES;
use stockcast::catalog::{ForecastModel, Symbol};
use stockcast::{ForecastSeries, HistorySeries, MarketDataService, Settings};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(
    name = "stockcast",
    version,
    about = "Synthetic stock history and model-biased price forecasts"
)]
struct Cli {
    /// Settings file (defaults to ./stockcast.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the simulated network delay
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price history for a ticker
    History {
        symbol: String,
        /// 1D, 1W, 1M, 3M or 1Y
        #[arg(long, default_value = "1M")]
        range: String,
        #[arg(long)]
        json: bool,
    },
    /// Forecast for a ticker
    Forecast {
        symbol: String,
        /// 1D, 3D, 7D, 14D or 30D
        #[arg(long, default_value = "7D")]
        horizon: String,
        /// cnn, lstm, hybrid or transformer
        #[arg(long, default_value = "hybrid")]
        model: String,
        #[arg(long)]
        json: bool,
    },
    /// Forecast models with sentiment and scorecards
    Models,
    /// Tickers with a dedicated price profile
    Symbols,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.no_latency {
        settings.latency_enabled = false;
    }

    setup_logging(&settings.log_filter);

    let service = MarketDataService::from_settings(&settings);

    match cli.command {
        Commands::History { symbol, range, json } => {
            tracing::info!(symbol = %symbol, range = %range, "Fetching history");
            let series = service
                .fetch_stock_data(&symbol, &range)
                .await
                .with_context(|| format!("history for {symbol} failed"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print_history(&series);
            }
        }
        Commands::Forecast {
            symbol,
            horizon,
            model,
            json,
        } => {
            tracing::info!(symbol = %symbol, horizon = %horizon, model = %model, "Fetching forecast");
            let series = service
                .get_prediction_data(&symbol, &horizon, &model)
                .await
                .with_context(|| format!("forecast for {symbol} failed"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print_forecast(&series);
            }
        }
        Commands::Models => print_models(),
        Commands::Symbols => print_symbols(),
    }

    Ok(())
}

// ============================================================================
// Initialization
// ============================================================================

fn setup_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Output
// ============================================================================

fn print_history(series: &HistorySeries) {
    println!("\n{} ({})", series.symbol, series.time_range);
    println!("{}", "─".repeat(44));
    println!("{:<12} {:>12} {:>16}", "Date", "Price", "Volume");
    for point in series.points() {
        println!(
            "{:<12} {:>12.2} {:>15.2}M",
            point.date,
            point.price,
            point.volume / 1_000_000.0
        );
    }
    println!("{}", "─".repeat(44));
    println!(
        "Open {:.2}  High {:.2}  Low {:.2}  Close {:.2}",
        series.open, series.high, series.low, series.close
    );
    println!("Avg volume {:.2}M", series.volume / 1_000_000.0);
    if let Some(change) = series.last_change_pct() {
        println!("Last change {:+.2}%", change);
    }
}

fn print_forecast(series: &ForecastSeries) {
    let model = ForecastModel::from_code(&series.model);
    let sentiment = model.profile().sentiment;

    println!(
        "\n{} {} forecast, {} model ({} {}%)",
        series.symbol,
        series.horizon,
        model.label(),
        sentiment.trend,
        sentiment.confidence
    );
    println!("{}", "─".repeat(62));
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>6}",
        "Date", "Actual", "Predicted", "Lower", "Upper", "Conf"
    );
    for point in &series.points {
        let fmt = |v: Option<f64>| v.map(|p| format!("{p:.2}")).unwrap_or_default();
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>6}",
            point.date,
            fmt(point.actual_price),
            fmt(point.predicted_price),
            fmt(point.lower_bound),
            fmt(point.upper_bound),
            point.confidence.map(|c| format!("{c}%")).unwrap_or_default()
        );
    }
    println!("{}", "─".repeat(62));
    println!("Historical volatility {:.3}%", series.historical_volatility);

    if let Some(summary) = series.summary() {
        println!(
            "{:.2} -> {:.2} ({:+.2}%, {:?}), final band {:.2}..{:.2} at {}%",
            summary.last_actual,
            summary.final_predicted,
            summary.change_pct,
            summary.direction,
            summary.final_lower,
            summary.final_upper,
            summary.final_confidence
        );
    }
}

fn print_models() {
    println!(
        "\n{:<8} {:<12} {:>6} {:>6} {:>8}  {:<14} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "Code", "Label", "Acc", "Vol", "Trend", "Sentiment", "Acc%", "Err", "Dir", "Eff", "Gen"
    );
    println!("{}", "─".repeat(92));
    for model in ForecastModel::ranked_by_accuracy() {
        let p = model.profile();
        let card = p.scorecard;
        let score = |f: fn(&stockcast::catalog::ModelScorecard) -> u8| {
            card.as_ref().map(|c| f(c).to_string()).unwrap_or_default()
        };
        println!(
            "{:<8} {:<12} {:>6.2} {:>6.2} {:>+8.3}  {:<14} {:>5} {:>5} {:>5} {:>5} {:>5}",
            p.code,
            p.label,
            p.accuracy_factor,
            p.volatility_factor,
            p.trend_per_day,
            format!("{} {}%", p.sentiment.trend, p.sentiment.confidence),
            score(|c| c.accuracy),
            score(|c| c.error_score),
            score(|c| c.directional),
            score(|c| c.efficiency),
            score(|c| c.generalization),
        );
    }
}

fn print_symbols() {
    println!("\n{:<8} {:<24} {:>10} {:>10}", "Ticker", "Name", "Base", "Step");
    println!("{}", "─".repeat(56));
    for profile in SYMBOL_PROFILES {
        let ticker = if profile.symbol == Symbol::Unknown {
            "*"
        } else {
            profile.ticker
        };
        println!(
            "{:<8} {:<24} {:>10.2} {:>10.2}",
            ticker, profile.name, profile.base_price, profile.volatility
        );
    }
}
