pub mod calendar;
pub mod forecast;
pub mod history;
pub mod latency;
pub mod walk;

pub use forecast::{confidence_at, historical_volatility, ForecastSynthesizer, HISTORY_WINDOW};
pub use history::HistorySynthesizer;
pub use latency::{LatencyStrategy, NoLatency, Operation, SimulatedLatency};
