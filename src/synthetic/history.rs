use super::calendar;
use super::walk::random_walk;
use crate::catalog::{RangeCode, Symbol};
use crate::error::{require, Result};
use crate::models::HistorySeries;
use chrono::NaiveDate;
use rand::Rng;

/// Generates synthetic price history for a ticker
///
/// Stateless apart from its constants; randomness comes from the caller's
/// generator so the same seed reproduces the same series.
#[derive(Debug, Clone)]
pub struct HistorySynthesizer {
    volume_base: f64,
    volume_volatility: f64,
    volume_scale: f64,
    min_price: f64,
}

impl Default for HistorySynthesizer {
    fn default() -> Self {
        Self {
            volume_base: 10.0,            // ~10M shares
            volume_volatility: 5.0,
            volume_scale: 1_000_000.0,
            min_price: 0.01,
        }
    }
}

impl HistorySynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize a series ending today (UTC)
    ///
    /// # Arguments
    /// * `symbol` - Ticker; unknown tickers use the default profile
    /// * `range_code` - `1D`, `1W`, `1M`, `3M` or `1Y`; anything else sizes like `1M`
    /// * `rng` - Source of randomness
    ///
    /// # Errors
    /// `InvalidArgument` when `symbol` or `range_code` is empty
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        range_code: &str,
        rng: &mut R,
    ) -> Result<HistorySeries> {
        self.synthesize_as_of(symbol, range_code, calendar::today(), rng)
    }

    /// Synthesize a series whose last date is `as_of`
    pub fn synthesize_as_of<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        range_code: &str,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<HistorySeries> {
        require("symbol", symbol)?;
        require("range_code", range_code)?;

        let range = RangeCode::from_code(range_code);
        if range == RangeCode::Other {
            tracing::warn!(
                range_code = %range_code,
                fallback = %range,
                "Unrecognized range code, using default length"
            );
        }
        let count = range.point_count();
        let profile = Symbol::from_ticker(symbol).profile();

        let prices: Vec<f64> = random_walk(rng, profile.base_price, profile.volatility, count)
            .into_iter()
            .map(|p| p.max(self.min_price))
            .collect();

        let volumes: Vec<f64> =
            random_walk(rng, self.volume_base, self.volume_volatility, count)
                .into_iter()
                .map(|v| (v * self.volume_scale).max(0.0))
                .collect();

        let dates = calendar::trailing_dates(count, as_of);

        let series = HistorySeries::from_parts(symbol, range_code, dates, prices, volumes);

        tracing::debug!(
            symbol = %symbol,
            range = %range,
            points = series.len(),
            open = series.open,
            close = series.close,
            "Synthesized price history"
        );

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::synthetic::ForecastSynthesizer;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_lengths_match_range() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(42);

        for range in RangeCode::ALL {
            let series = synth
                .synthesize_as_of("AAPL", range.code(), anchor(), &mut rng)
                .unwrap();
            let expected = range.point_count();
            assert_eq!(series.dates.len(), expected, "{}", range);
            assert_eq!(series.prices.len(), expected, "{}", range);
            assert_eq!(series.volumes.len(), expected, "{}", range);
        }
    }

    #[test]
    fn test_unrecognized_range_uses_month_length() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(42);
        let series = synth.synthesize_as_of("AAPL", "6M", anchor(), &mut rng).unwrap();

        assert_eq!(series.len(), 30);
        assert_eq!(series.time_range, "6M");
    }

    #[test]
    fn test_empty_arguments_rejected() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            synth.synthesize_as_of("", "1M", anchor(), &mut rng),
            Err(Error::InvalidArgument { field: "symbol" })
        );
        assert_eq!(
            synth.synthesize_as_of("AAPL", "", anchor(), &mut rng),
            Err(Error::InvalidArgument { field: "range_code" })
        );
    }

    #[test]
    fn test_blank_arguments_fall_back() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(42);

        let blank_range = synth.synthesize_as_of("AAPL", " ", anchor(), &mut rng).unwrap();
        assert_eq!(blank_range.len(), 30);
        assert_eq!(blank_range.time_range, " ");

        // Unknown ticker profile: 100.0 seed, steps of at most 1.0
        let blank_symbol = synth.synthesize_as_of(" ", "1M", anchor(), &mut rng).unwrap();
        assert_eq!(blank_symbol.len(), 30);
        assert!((blank_symbol.prices[0] - 100.0).abs() <= 1.01);
    }

    #[test]
    fn test_floors_hold_on_steepest_decline() {
        // Every draw is 0.0, so every step is the largest possible drop
        let synth = HistorySynthesizer::new();
        let mut rng = StepRng::new(0, 0);
        let series = synth.synthesize_as_of("AAPL", "1Y", anchor(), &mut rng).unwrap();

        assert_eq!(series.len(), 250);
        assert!(series.prices.iter().all(|&p| p >= 0.01));
        assert!(series.volumes.iter().all(|&v| v >= 0.0));
        assert_eq!(series.low, 0.01);
        assert_eq!(series.high, 174.0);
        assert_eq!(series.close, 0.01);
        // 7.5M + 5M + 2.5M before the floor, spread over 250 points
        assert!((series.volume - 60_000.0).abs() < 1e-6);

        let forecast = ForecastSynthesizer::default().project(&series, "30D", "hybrid", &mut rng);
        assert_eq!(forecast.projected().len(), 30);
        for point in forecast.projected() {
            let predicted = point.predicted_price.unwrap();
            let lower = point.lower_bound.unwrap();
            let upper = point.upper_bound.unwrap();
            assert!(predicted.is_finite() && lower.is_finite() && upper.is_finite());
            assert!(lower <= predicted && predicted <= upper);
        }
    }

    #[test]
    fn test_derived_fields() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(11);
        let series = synth.synthesize_as_of("GOOGL", "1Y", anchor(), &mut rng).unwrap();

        let max = series.prices.iter().copied().fold(f64::MIN, f64::max);
        let min = series.prices.iter().copied().fold(f64::MAX, f64::min);
        let mean = series.volumes.iter().sum::<f64>() / series.volumes.len() as f64;

        assert_eq!(series.open, series.prices[0]);
        assert_eq!(series.close, *series.prices.last().unwrap());
        assert_eq!(series.high, max);
        assert_eq!(series.low, min);
        assert!(series.high >= series.low);
        assert!((series.volume - mean).abs() < 1e-6);
    }

    #[test]
    fn test_dates_end_on_anchor_without_gaps() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(5);
        let series = synth.synthesize_as_of("MSFT", "3M", anchor(), &mut rng).unwrap();

        assert_eq!(*series.dates.last().unwrap(), anchor());
        for pair in series.dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn test_one_day_range_is_daily_buckets() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(5);
        let series = synth.synthesize_as_of("MSFT", "1D", anchor(), &mut rng).unwrap();

        assert_eq!(series.len(), 24);
        assert_eq!((anchor() - series.dates[0]).num_days(), 23);
    }

    #[test]
    fn test_aapl_week_stays_near_seed() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(2024);
        let series = synth.synthesize_as_of("AAPL", "1W", anchor(), &mut rng).unwrap();

        assert_eq!(series.len(), 7);
        for (i, price) in series.prices.iter().enumerate() {
            // Each step moves at most volatility / 2 = 1.5
            let bound = 1.5 * (i + 1) as f64 + 0.01;
            assert!(
                (price - 175.50).abs() <= bound,
                "Price {} at step {} drifted past {}",
                price,
                i,
                bound
            );
        }
    }

    #[test]
    fn test_volumes_non_negative_and_near_ten_million() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(99);
        let series = synth.synthesize_as_of("BABA", "1W", anchor(), &mut rng).unwrap();

        for volume in &series.volumes {
            assert!(*volume >= 0.0);
            // 7 steps of at most 2.5M each around 10M
            assert!(*volume <= 10_000_000.0 + 7.0 * 2_500_000.0 + 10_000.0);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let synth = HistorySynthesizer::new();
        let a = synth
            .synthesize_as_of("AMZN", "1M", anchor(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        let b = synth
            .synthesize_as_of("AMZN", "1M", anchor(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_synthesize_ends_today() {
        let synth = HistorySynthesizer::new();
        let mut rng = StdRng::seed_from_u64(1);
        let before = calendar::today();
        let series = synth.synthesize("AAPL", "1W", &mut rng).unwrap();
        let after = calendar::today();

        let last = *series.dates.last().unwrap();
        assert!(last == before || last == after);
    }
}
