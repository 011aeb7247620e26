use super::calendar;
use super::history::HistorySynthesizer;
use super::walk::round_to_cents;
use crate::catalog::{ForecastModel, HorizonCode};
use crate::error::{require, Result};
use crate::models::{ForecastPoint, ForecastSeries, HistorySeries};
use chrono::NaiveDate;
use rand::Rng;

/// Number of trailing historical points shown before the projection
pub const HISTORY_WINDOW: usize = 20;

/// Range used to fetch the history a forecast extrapolates from
const SOURCE_RANGE: &str = "1M";

const START_CONFIDENCE: f64 = 90.0;
const CONFIDENCE_DECAY: f64 = 10.0;

/// Mean absolute relative move between consecutive prices, in percent
///
/// A pair whose earlier price is zero contributes 0 instead of a
/// non-finite term. Fewer than two prices yield 0.
pub fn historical_volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let total: f64 = prices
        .windows(2)
        .map(|pair| {
            let (prev, price) = (pair[0], pair[1]);
            if prev == 0.0 {
                0.0
            } else {
                (price - prev).abs() / prev
            }
        })
        .sum();

    total / (prices.len() - 1) as f64 * 100.0
}

/// Confidence for projection step `step` of `horizon_days`
///
/// Starts at 90 and decays linearly; always within [0, 100].
pub fn confidence_at(step: usize, horizon_days: usize) -> u8 {
    let days = horizon_days.max(1) as f64;
    let raw = START_CONFIDENCE - step as f64 * (CONFIDENCE_DECAY / days);
    raw.round().clamp(0.0, 100.0) as u8
}

/// Extrapolates a forward path from recent synthetic history
#[derive(Debug, Clone, Default)]
pub struct ForecastSynthesizer {
    history: HistorySynthesizer,
}

impl ForecastSynthesizer {
    pub fn new(history: HistorySynthesizer) -> Self {
        Self { history }
    }

    /// Forecast from a fresh one-month history ending today
    ///
    /// # Errors
    /// `InvalidArgument` when any parameter is empty
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        horizon_code: &str,
        model: &str,
        rng: &mut R,
    ) -> Result<ForecastSeries> {
        self.forecast_as_of(symbol, horizon_code, model, calendar::today(), rng)
    }

    pub fn forecast_as_of<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        horizon_code: &str,
        model: &str,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<ForecastSeries> {
        require("symbol", symbol)?;
        require("horizon_code", horizon_code)?;
        require("model", model)?;

        let history = self.history.synthesize_as_of(symbol, SOURCE_RANGE, as_of, rng)?;
        Ok(self.project(&history, horizon_code, model, rng))
    }

    /// Project forward from an existing history
    ///
    /// Emits the trailing window of `history` (up to 20 points) followed by
    /// one projected point per horizon day, dated from the day after the
    /// last historical date.
    pub fn project<R: Rng + ?Sized>(
        &self,
        history: &HistorySeries,
        horizon_code: &str,
        model_code: &str,
        rng: &mut R,
    ) -> ForecastSeries {
        let horizon = HorizonCode::from_code(horizon_code);
        let model = ForecastModel::from_code(model_code);
        if horizon == HorizonCode::Other {
            tracing::warn!(horizon_code = %horizon_code, fallback = %horizon, "Unrecognized horizon code");
        }
        if model == ForecastModel::Unknown {
            tracing::warn!(model = %model_code, "Unrecognized model, using neutral factors");
        }

        let days = horizon.days();
        let profile = model.profile();

        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let recent_prices = &history.prices[start..];
        let recent_dates = &history.dates[start..];
        let last_price = recent_prices.last().copied().unwrap_or(0.0);

        let volatility = historical_volatility(recent_prices) * profile.volatility_factor;

        let mut points = Vec::with_capacity(recent_prices.len() + days);
        for (&date, &price) in recent_dates.iter().zip(recent_prices) {
            points.push(ForecastPoint::historical(date, price));
        }

        let last_date = recent_dates.last().copied().unwrap_or_else(calendar::today);
        let future_dates = calendar::following_dates(days, last_date);

        let mut current = last_price;
        for (i, date) in future_dates.into_iter().enumerate() {
            let random_change = (rng.gen::<f64>() - 0.5) * volatility / 100.0 * current;
            let trend_change = profile.trend_per_day * current;
            current = round_to_cents(current + (random_change + trend_change) * profile.accuracy_factor);

            let confidence = confidence_at(i, days);
            // Wider for weaker models and further steps
            let half_width = (volatility / 100.0
                * current
                * (1.0 - profile.accuracy_factor)
                * (i + 1) as f64
                / 2.0)
                .abs();

            points.push(ForecastPoint::projected(
                date,
                current,
                round_to_cents(current - half_width),
                round_to_cents(current + half_width),
                confidence,
            ));
        }

        tracing::debug!(
            symbol = %history.symbol,
            horizon = %horizon,
            model = %model,
            volatility = volatility,
            last_price = last_price,
            projected_to = current,
            "Projected forecast"
        );

        ForecastSeries {
            symbol: history.symbol.clone(),
            horizon: horizon_code.to_string(),
            model: model_code.to_string(),
            historical_volatility: volatility,
            points,
        }
    }
}
