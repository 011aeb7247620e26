use clap::Parser;
use stockcast::catalog::HorizonCode;
use stockcast::evaluation::{ModelEvaluator, ModelTrendStats};

/// Monte-Carlo comparison of every forecast model for one ticker
#[derive(Parser)]
#[command(name = "compare_models")]
struct Args {
    #[arg(default_value = "AAPL")]
    symbol: String,

    /// 1D, 3D, 7D, 14D or 30D
    #[arg(long, default_value = "7D")]
    horizon: String,

    /// Forecasts sampled per model
    #[arg(long, default_value_t = 500)]
    trials: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter("stockcast=info")
        .init();

    let args = Args::parse();
    let horizon = HorizonCode::from_code(&args.horizon);

    println!("\n╔═══════════════════════════════════════════════════════╗");
    println!("║            FORECAST MODEL COMPARISON                  ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    println!(
        "  {} over {} ({} trials per model, seed {})",
        args.symbol,
        horizon.label(),
        args.trials,
        args.seed
    );

    let evaluator = ModelEvaluator::new(args.symbol.clone(), horizon, args.trials, args.seed);
    let results = evaluator.run()?;

    print_summary_comparison(&results);

    Ok(())
}

fn print_summary_comparison(results: &[ModelTrendStats]) {
    println!(
        "\n{:<14} {:>10} {:>9} {:>7} {:>9} {:>7}",
        "Model", "Change%", "StdDev", "Up%", "Band%", "Conf"
    );
    println!("{}", "─".repeat(62));

    for stats in results {
        println!(
            "{:<14} {:>+10.3} {:>9.3} {:>7.1} {:>9.3} {:>7.1}",
            stats.model.label(),
            stats.mean_change_pct,
            stats.change_std_dev,
            stats.up_ratio * 100.0,
            stats.mean_final_band_pct,
            stats.mean_final_confidence
        );
    }

    if let Some(best) = results
        .iter()
        .max_by(|a, b| a.mean_change_pct.total_cmp(&b.mean_change_pct))
    {
        println!(
            "\n📈 Most bullish: {} ({:+.3}%)",
            best.model.label(),
            best.mean_change_pct
        );
    }

    if let Some(tightest) = results
        .iter()
        .min_by(|a, b| a.mean_final_band_pct.total_cmp(&b.mean_final_band_pct))
    {
        println!(
            "🎯 Tightest interval: {} ({:.3}% wide)",
            tightest.model.label(),
            tightest.mean_final_band_pct
        );
    }

    println!("\n═══════════════════════════════════════════════════════\n");
}
