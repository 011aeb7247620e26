use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One co-indexed entry of a history series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
}

/// Synthetic OHLCV-like price history for one ticker
///
/// `dates`, `prices` and `volumes` always have the same length and share
/// indices. The scalar fields are derived from the price/volume sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySeries {
    pub symbol: String,
    /// Range code exactly as requested, even when it fell back to the default
    pub time_range: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    /// Mean of `volumes`
    pub volume: f64,
}

impl HistorySeries {
    /// Build a series and derive open/close/high/low/volume
    ///
    /// All three sequences are truncated to the shortest one so they stay
    /// co-indexed. Empty input derives zeros.
    pub fn from_parts(
        symbol: impl Into<String>,
        time_range: impl Into<String>,
        mut dates: Vec<NaiveDate>,
        mut prices: Vec<f64>,
        mut volumes: Vec<f64>,
    ) -> Self {
        let len = dates.len().min(prices.len()).min(volumes.len());
        dates.truncate(len);
        prices.truncate(len);
        volumes.truncate(len);

        let open = prices.first().copied().unwrap_or(0.0);
        let close = prices.last().copied().unwrap_or(0.0);
        let high = if prices.is_empty() {
            0.0
        } else {
            prices.iter().copied().fold(f64::MIN, f64::max)
        };
        let low = if prices.is_empty() {
            0.0
        } else {
            prices.iter().copied().fold(f64::MAX, f64::min)
        };
        let volume = if volumes.is_empty() {
            0.0
        } else {
            volumes.iter().sum::<f64>() / volumes.len() as f64
        };

        Self {
            symbol: symbol.into(),
            time_range: time_range.into(),
            dates,
            prices,
            volumes,
            open,
            close,
            high,
            low,
            volume,
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = HistoryPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.prices)
            .zip(&self.volumes)
            .map(|((&date, &price), &volume)| HistoryPoint {
                date,
                price,
                volume,
            })
    }

    /// Percent change of the last price against the one before it
    pub fn last_change_pct(&self) -> Option<f64> {
        let n = self.prices.len();
        if n < 2 {
            return None;
        }
        let prev = self.prices[n - 2];
        if prev == 0.0 {
            return None;
        }
        Some((self.prices[n - 1] - prev) / prev * 100.0)
    }
}

/// One entry of a forecast series
///
/// Historical points carry `actual_price` only. Projected points carry
/// `predicted_price`, the symmetric bounds and a confidence percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub actual_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub upper_bound: Option<f64>,
    pub lower_bound: Option<f64>,
    pub confidence: Option<u8>,
    pub is_forecast: bool,
}

impl ForecastPoint {
    pub fn historical(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            actual_price: Some(price),
            predicted_price: None,
            upper_bound: None,
            lower_bound: None,
            confidence: None,
            is_forecast: false,
        }
    }

    /// `confidence` is expected in [0, 100]; see `confidence_at`
    pub fn projected(
        date: NaiveDate,
        predicted: f64,
        lower: f64,
        upper: f64,
        confidence: u8,
    ) -> Self {
        Self {
            date,
            actual_price: None,
            predicted_price: Some(predicted),
            upper_bound: Some(upper),
            lower_bound: Some(lower),
            confidence: Some(confidence),
            is_forecast: true,
        }
    }

    /// Whichever price this point carries
    pub fn price(&self) -> Option<f64> {
        if self.is_forecast {
            self.predicted_price
        } else {
            self.actual_price
        }
    }
}

/// Trailing history immediately followed by the projected window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    pub symbol: String,
    pub horizon: String,
    pub model: String,
    /// Mean absolute daily move in percent, already scaled by the model
    pub historical_volatility: f64,
    pub points: Vec<ForecastPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Where the projection ends relative to the last observed price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub last_actual: f64,
    pub final_predicted: f64,
    pub change_pct: f64,
    pub direction: TrendDirection,
    pub final_confidence: u8,
    pub final_lower: f64,
    pub final_upper: f64,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The trailing historical window
    pub fn historical(&self) -> &[ForecastPoint] {
        let split = self.split_index();
        &self.points[..split]
    }

    /// The projected window
    pub fn projected(&self) -> &[ForecastPoint] {
        let split = self.split_index();
        &self.points[split..]
    }

    fn split_index(&self) -> usize {
        self.points
            .iter()
            .position(|p| p.is_forecast)
            .unwrap_or(self.points.len())
    }

    pub fn summary(&self) -> Option<ForecastSummary> {
        let last = self.projected().last()?;
        let final_predicted = last.predicted_price?;
        let last_actual = self
            .historical()
            .last()
            .and_then(|p| p.actual_price)
            .unwrap_or(final_predicted);

        let change_pct = if last_actual != 0.0 {
            (final_predicted - last_actual) / last_actual * 100.0
        } else {
            0.0
        };
        let direction = if final_predicted > last_actual {
            TrendDirection::Up
        } else if final_predicted < last_actual {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        Some(ForecastSummary {
            last_actual,
            final_predicted,
            change_pct,
            direction,
            final_confidence: last.confidence.unwrap_or(0),
            final_lower: last.lower_bound.unwrap_or(final_predicted),
            final_upper: last.upper_bound.unwrap_or(final_predicted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_history_derived_fields() {
        let series = HistorySeries::from_parts(
            "AAPL",
            "1W",
            vec![day(1), day(2), day(3), day(4)],
            vec![101.0, 99.5, 104.25, 102.0],
            vec![9_000_000.0, 11_000_000.0, 10_000_000.0, 12_000_000.0],
        );

        assert_eq!(series.open, 101.0);
        assert_eq!(series.close, 102.0);
        assert_eq!(series.high, 104.25);
        assert_eq!(series.low, 99.5);
        assert_eq!(series.volume, 10_500_000.0);
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_history_points_are_co_indexed() {
        let series = HistorySeries::from_parts(
            "MSFT",
            "1W",
            vec![day(1), day(2)],
            vec![330.0, 331.5],
            vec![1.0, 2.0],
        );
        let points: Vec<HistoryPoint> = series.points().collect();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].date, day(2));
        assert_eq!(points[1].price, 331.5);
        assert_eq!(points[1].volume, 2.0);
    }

    #[test]
    fn test_last_change_pct() {
        let series = HistorySeries::from_parts(
            "AAPL",
            "1W",
            vec![day(1), day(2)],
            vec![100.0, 102.0],
            vec![1.0, 1.0],
        );
        let change = series.last_change_pct().unwrap();
        assert!((change - 2.0).abs() < 1e-9);

        let single = HistorySeries::from_parts("AAPL", "1W", vec![day(1)], vec![100.0], vec![1.0]);
        assert!(single.last_change_pct().is_none());
    }

    #[test]
    fn test_mismatched_lengths_truncate_to_shortest() {
        let series = HistorySeries::from_parts(
            "AAPL",
            "1W",
            vec![day(1), day(2), day(3)],
            vec![100.0, 103.0],
            vec![1.0, 2.0, 3.0, 4.0],
        );

        assert_eq!(series.dates.len(), 2);
        assert_eq!(series.prices.len(), 2);
        assert_eq!(series.volumes.len(), 2);
        assert_eq!(series.high, 103.0);
        assert_eq!(series.volume, 1.5);
        assert_eq!(series.points().count(), 2);
    }

    #[test]
    fn test_empty_history_derives_zeros() {
        let series = HistorySeries::from_parts("X", "1M", vec![], vec![], vec![]);
        assert!(series.is_empty());
        assert_eq!(series.high, 0.0);
        assert_eq!(series.low, 0.0);
        assert_eq!(series.volume, 0.0);
    }

    #[test]
    fn test_forecast_split_and_summary() {
        let series = ForecastSeries {
            symbol: "AAPL".to_string(),
            horizon: "3D".to_string(),
            model: "lstm".to_string(),
            historical_volatility: 1.2,
            points: vec![
                ForecastPoint::historical(day(1), 100.0),
                ForecastPoint::historical(day(2), 100.0),
                ForecastPoint::projected(day(3), 101.0, 100.5, 101.5, 90),
                ForecastPoint::projected(day(4), 103.0, 102.0, 104.0, 87),
            ],
        };

        assert_eq!(series.historical().len(), 2);
        assert_eq!(series.projected().len(), 2);

        let summary = series.summary().unwrap();
        assert_eq!(summary.last_actual, 100.0);
        assert_eq!(summary.final_predicted, 103.0);
        assert_eq!(summary.direction, TrendDirection::Up);
        assert_eq!(summary.final_confidence, 87);
        assert!((summary.change_pct - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let point = ForecastPoint::projected(day(5), 101.0, 100.0, 102.0, 88);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["predictedPrice"], 101.0);
        assert_eq!(json["isForecast"], true);
        assert!(json["actualPrice"].is_null());
    }
}
