// Entry points consumed by the dashboard layer
// Each call builds its own generator, so concurrent calls share nothing mutable

use crate::config::Settings;
use crate::error::{require, Result};
use crate::models::{ForecastSeries, HistorySeries};
use crate::synthetic::latency::simulate;
use crate::synthetic::{
    ForecastSynthesizer, HistorySynthesizer, LatencyStrategy, NoLatency, Operation,
    SimulatedLatency,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Serves synthetic history and forecasts with optional simulated latency
#[derive(Clone)]
pub struct MarketDataService {
    history: HistorySynthesizer,
    forecast: ForecastSynthesizer,
    latency: Arc<dyn LatencyStrategy>,
    seed: Option<u64>,
}

impl Default for MarketDataService {
    fn default() -> Self {
        Self::new(Arc::new(SimulatedLatency::default()), None)
    }
}

impl MarketDataService {
    pub fn new(latency: Arc<dyn LatencyStrategy>, seed: Option<u64>) -> Self {
        let history = HistorySynthesizer::default();
        Self {
            forecast: ForecastSynthesizer::new(history.clone()),
            history,
            latency,
            seed,
        }
    }

    /// No artificial delay, fresh entropy per call
    pub fn instant() -> Self {
        Self::new(Arc::new(NoLatency), None)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.latency(), settings.seed)
    }

    /// Reuse `seed` for every call, making results reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Synthetic price history for `symbol` over `range_code`
    ///
    /// # Errors
    /// `InvalidArgument` when either parameter is empty. Unrecognized range
    /// codes fall back to the one-month length.
    pub async fn fetch_stock_data(&self, symbol: &str, range_code: &str) -> Result<HistorySeries> {
        require("symbol", symbol)?;
        require("range_code", range_code)?;

        simulate(self.latency.as_ref(), Operation::History).await;

        let mut rng = self.rng();
        self.history.synthesize(symbol, range_code, &mut rng)
    }

    /// 20 trailing historical points followed by the projected horizon
    ///
    /// # Errors
    /// `InvalidArgument` when any parameter is empty
    pub async fn get_prediction_data(
        &self,
        symbol: &str,
        horizon_code: &str,
        model: &str,
    ) -> Result<ForecastSeries> {
        require("symbol", symbol)?;
        require("horizon_code", horizon_code)?;
        require("model", model)?;

        simulate(self.latency.as_ref(), Operation::Forecast).await;
        // The trailing window comes from a history fetch, which pays its own delay
        simulate(self.latency.as_ref(), Operation::History).await;

        let mut rng = self.rng();
        let series = self.forecast.forecast(symbol, horizon_code, model, &mut rng)?;

        tracing::debug!(
            symbol = %symbol,
            horizon = %horizon_code,
            model = %model,
            points = series.len(),
            "Served forecast"
        );

        Ok(series)
    }
}

/// Fetch history through a default service (simulated latency, fresh entropy)
pub async fn fetch_stock_data(symbol: &str, range_code: &str) -> Result<HistorySeries> {
    MarketDataService::default()
        .fetch_stock_data(symbol, range_code)
        .await
}

/// Fetch a forecast through a default service (simulated latency, fresh entropy)
pub async fn get_prediction_data(
    symbol: &str,
    horizon_code: &str,
    model: &str,
) -> Result<ForecastSeries> {
    MarketDataService::default()
        .get_prediction_data(symbol, horizon_code, model)
        .await
}
