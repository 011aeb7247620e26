use crate::catalog::{ForecastModel, HorizonCode};
use crate::models::{ForecastSeries, TrendDirection};
use crate::synthetic::ForecastSynthesizer;
use crate::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Aggregate behaviour of one model over repeated forecasts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTrendStats {
    pub model: ForecastModel,
    pub trials: usize,
    /// Mean change from last actual to final predicted price, in percent
    pub mean_change_pct: f64,
    pub change_std_dev: f64,
    /// Share of trials that ended above the last actual price
    pub up_ratio: f64,
    /// Mean width of the final interval relative to its prediction, in percent
    pub mean_final_band_pct: f64,
    pub mean_final_confidence: f64,
}

impl ModelTrendStats {
    fn from_runs(model: ForecastModel, runs: &[ForecastSeries]) -> Self {
        let summaries: Vec<_> = runs.iter().filter_map(|s| s.summary()).collect();
        let n = summaries.len();
        if n == 0 {
            return Self {
                model,
                trials: 0,
                mean_change_pct: 0.0,
                change_std_dev: 0.0,
                up_ratio: 0.0,
                mean_final_band_pct: 0.0,
                mean_final_confidence: 0.0,
            };
        }

        let changes: Vec<f64> = summaries.iter().map(|s| s.change_pct).collect();
        let mean_change_pct = changes.iter().sum::<f64>() / n as f64;
        let variance = changes
            .iter()
            .map(|c| (c - mean_change_pct).powi(2))
            .sum::<f64>()
            / n as f64;

        let ups = summaries
            .iter()
            .filter(|s| s.direction == TrendDirection::Up)
            .count();

        let band_total: f64 = summaries
            .iter()
            .map(|s| {
                if s.final_predicted != 0.0 {
                    (s.final_upper - s.final_lower) / s.final_predicted * 100.0
                } else {
                    0.0
                }
            })
            .sum();

        let confidence_total: f64 = summaries.iter().map(|s| s.final_confidence as f64).sum();

        Self {
            model,
            trials: n,
            mean_change_pct,
            change_std_dev: variance.sqrt(),
            up_ratio: ups as f64 / n as f64,
            mean_final_band_pct: band_total / n as f64,
            mean_final_confidence: confidence_total / n as f64,
        }
    }
}

/// Samples every known model repeatedly to compare their statistical character
pub struct ModelEvaluator {
    synthesizer: ForecastSynthesizer,
    symbol: String,
    horizon: HorizonCode,
    trials: usize,
    seed: u64,
}

impl ModelEvaluator {
    /// Create a new evaluator
    ///
    /// # Arguments
    /// * `symbol` - Ticker to forecast
    /// * `horizon` - Projection length
    /// * `trials` - Forecasts per model (a few hundred gives stable means)
    /// * `seed` - Base seed; each model gets its own stream derived from it
    pub fn new(symbol: impl Into<String>, horizon: HorizonCode, trials: usize, seed: u64) -> Self {
        Self {
            synthesizer: ForecastSynthesizer::default(),
            symbol: symbol.into(),
            horizon,
            trials,
            seed,
        }
    }

    /// Run the evaluation anchored at `as_of`
    pub fn run_as_of(&self, as_of: NaiveDate) -> Result<Vec<ModelTrendStats>> {
        let mut results = Vec::with_capacity(ForecastModel::ALL.len());

        for (index, model) in ForecastModel::ALL.into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
            let mut runs = Vec::with_capacity(self.trials);

            for _ in 0..self.trials {
                runs.push(self.synthesizer.forecast_as_of(
                    &self.symbol,
                    self.horizon.code(),
                    model.code(),
                    as_of,
                    &mut rng,
                )?);
            }

            let stats = ModelTrendStats::from_runs(model, &runs);
            tracing::info!(
                model = %model,
                trials = stats.trials,
                mean_change_pct = stats.mean_change_pct,
                "Evaluated model"
            );
            results.push(stats);
        }

        Ok(results)
    }

    pub fn run(&self) -> Result<Vec<ModelTrendStats>> {
        self.run_as_of(crate::synthetic::calendar::today())
    }
}
